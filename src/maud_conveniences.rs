use crate::data::teacher::Teacher;
use maud::{Markup, html};

pub fn title(s: &'static str) -> Markup {
    html! {
        h1 class="text-2xl font-semibold mb-4" {(s)}
    }
}

pub fn render_nav(user: Option<Teacher>) -> Markup {
    html! {
        nav class="w-full bg-gray-800 px-6 py-3 mb-6 flex flex-row justify-between items-center shadow-md" {
            a href="/dashboard" class="text-xl font-bold" {"Gradebook"}
            @if let Some(user) = user {
                div class="flex flex-row space-x-4 items-center" {
                    span class="text-gray-300" {(user.username)}
                    a href="/logout" class="bg-slate-600 hover:bg-slate-800 font-bold py-1 px-3 rounded" {"Logout"}
                }
            } @else {
                a href="/login" class="bg-slate-600 hover:bg-slate-800 font-bold py-1 px-3 rounded" {"Login"}
            }
        }
    }
}

pub fn simple_form_element(
    name: &'static str,
    label: &'static str,
    required: bool,
    input_type: Option<&'static str>,
) -> Markup {
    let input_type = input_type.unwrap_or("text");
    html! {
        div class="mb-4" {
            label for=(name) class="block text-sm font-bold mb-2 text-gray-300" {(label)}
            input required[required] type=(input_type) id=(name) name=(name) class="shadow appearance-none border rounded w-full py-2 px-3 leading-tight focus:outline-none focus:shadow-outline bg-gray-700 border-gray-600" {}
        }
    }
}

pub fn form_submit_button(text: &'static str) -> Markup {
    html! {
        div class="flex items-center justify-between" {
            button type="submit" class="bg-blue-500 hover:bg-blue-700 font-bold py-2 px-4 rounded focus:outline-none focus:shadow-outline" {
                (text)
            }
        }
    }
}

pub fn render_table<const N: usize>(
    overall_title: &'static str,
    titles: [&'static str; N],
    items: Vec<[Markup; N]>,
) -> Markup {
    html! {
        div class="container mx-auto" {
            (title(overall_title))
            div class="overflow-x-auto" {
                table class="min-w-full bg-gray-800 rounded shadow-md" {
                    thead class="bg-gray-700" {
                        tr {
                            @for title in titles {
                                th class="py-2 px-4 text-left font-semibold text-gray-300" {(title)}
                            }
                        }
                    }
                    tbody {
                        @for row in items {
                            tr {
                                @for col in row {
                                    td class="py-2 px-4 border-b border-gray-600 text-gray-200" {(col)}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
