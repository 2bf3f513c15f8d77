// SPDX-License-Identifier: Apache-2.0
//! HTML elements carrying utility classes, with responsive replicas.

use std::fmt::Write as _;

use twz_style::Breakpoints;

/// `<tag class="a b">content</tag>`; `content` is inserted literally.
#[must_use]
pub fn element(tag: &str, classes: &[String], content: &str) -> String {
    format!("<{tag} class=\"{}\">{content}</{tag}>", classes.join(" "))
}

/// The element, followed by one copy per breakpoint with every class
/// prefixed `<breakpoint>:` under an HTML comment naming it.
#[must_use]
pub fn classes_to_code(
    screens: &Breakpoints,
    tag: &str,
    classes: &[String],
    content: &str,
) -> String {
    let mut html = element(tag, classes, content);
    for screen in screens.iter() {
        let prefixed: Vec<String> = classes
            .iter()
            .map(|class| format!("{screen}:{class}"))
            .collect();
        let _ = write!(
            html,
            "\n\n<!-- {screen} -->\n{}",
            element(tag, &prefixed, content)
        );
    }
    html
}
