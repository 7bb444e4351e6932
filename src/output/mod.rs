mod html;
mod json;
mod text;

pub use html::output_html;
pub use json::output_json;
pub use text::print_deals;

/// Uppercase the first letter, the way a city slug is displayed
/// ("berlin" -> "Berlin").
fn capitalized(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
