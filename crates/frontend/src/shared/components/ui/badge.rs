use leptos::prelude::*;

/// CSS-класс бейджа статуса: `status <status в нижнем регистре>`
pub fn status_class(status: &str) -> String {
    format!("status {}", status.trim().to_lowercase())
}

/// Status badge component for catalogue states (active, inactive, ...)
#[component]
pub fn StatusBadge(
    /// Status label exactly as stored on the server
    #[prop(into)]
    status: String,
) -> impl IntoView {
    let class = status_class(&status);

    view! {
        <span class=class>
            {status}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_class() {
        assert_eq!(status_class("Active"), "status active");
        assert_eq!(status_class("inactive"), "status inactive");
    }
}
