//! The fixed layout rules every preset starts with.

/// Base rules as (scoped element selectors, declarations).
///
/// These are identical for every preset and come before the override rules.
const BASE_RULES: &[(&[&str], &str)] = &[
    (&["label"], "display:block; margin-bottom:0.25rem; font-weight:500;"),
    (
        &["input", "select", "textarea", "button"],
        "width:100%; padding:0.5rem; margin-bottom:1rem; border:1px solid #ced4da; \
         border-radius:0.375rem; font-size:1rem; height:auto !important;",
    ),
    (
        &["input[type=\"radio\"]", "input[type=\"checkbox\"]"],
        "width:auto; margin-right:0.5rem;",
    ),
    (
        &["input[type=\"checkbox\"]", "input[type=\"radio\"]"],
        "margin-bottom:0;",
    ),
    (&[".form-group"], "margin-bottom:1rem;"),
    (
        &[".form-inline"],
        "display:flex; align-items:center; gap:1rem; flex-wrap:wrap;",
    ),
    (
        &[".form-check"],
        "display:flex; align-items:center; margin-bottom:0.5rem;",
    ),
    (&[".form-check input"], "margin-right:0.5rem;"),
    (&[".form-actions"], "display:flex; gap:1rem;"),
    (&["input[type=\"range\"]"], "width:100%;"),
];

/// Number of rules [`write_base_rules`] emits.
#[cfg(test)]
pub(crate) const BASE_RULE_COUNT: usize = BASE_RULES.len();

/// Prefixes each element selector with `.{class}` and joins them.
///
/// `class` must already have passed
/// [`escape_class_name`](crate::escape_class_name).
pub(crate) fn scoped_selector(class: &str, elements: &[&str]) -> String {
    elements
        .iter()
        .map(|element| format!(".{} {}", class, element))
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn write_base_rules(out: &mut String, class: &str) {
    for (elements, declarations) in BASE_RULES {
        out.push_str(&scoped_selector(class, elements));
        out.push_str(" { ");
        out.push_str(declarations);
        out.push_str(" }\n");
    }
}
