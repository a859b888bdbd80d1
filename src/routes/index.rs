use axum::response::Redirect;

pub async fn get_index_route() -> Redirect {
    Redirect::to("/login")
}
