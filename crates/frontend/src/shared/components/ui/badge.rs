use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor};

/// Badge colour for a status, priority or risk cell
pub fn badge_color(text: &str) -> BadgeColor {
    match text {
        "Active" | "Complete" | "Completed" | "Success" | "Resolved" | "Ready" | "Low" => {
            BadgeColor::Success
        }
        "Pending" | "In Progress" | "Processing" | "Medium" | "Warning" | "Open" => {
            BadgeColor::Warning
        }
        "High" | "Critical" | "Failed" | "Error" | "Inactive" | "Urgent" => BadgeColor::Danger,
        "Draft" | "Not Started" => BadgeColor::Subtle,
        _ => BadgeColor::Informative,
    }
}

#[component]
pub fn StatusBadge(#[prop(into)] text: String) -> impl IntoView {
    let color = badge_color(&text);
    view! {
        <Badge appearance=BadgeAppearance::Tint color=color>
            {text}
        </Badge>
    }
}
