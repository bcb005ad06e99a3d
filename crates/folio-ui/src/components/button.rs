//! Button Components
//!
//! Button styles used across the page:
//! - Primary: Main actions (submit, call to action)
//! - Ghost: Quiet secondary actions
//! - Chip: Wide pill buttons in generated lists (certifications)
//! - Floating: Fixed-position round button (back to top)

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Ghost,
    Chip,
    Floating,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Ghost => "btn-ghost",
            ButtonVariant::Chip => "btn-chip",
            ButtonVariant::Floating => "btn-floating",
        }
    }
}

/// Join a base class with optional extra classes.
pub fn class_list(base: &str, extra: Option<&str>) -> String {
    match extra.map(str::trim) {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Accessible label when the visible text is not descriptive enough
    #[props(default)]
    pub aria_label: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
    /// Optional inline style (used for show/hide)
    #[props(default)]
    pub style: Option<String>,
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Chip,
///         aria_label: cert.aria_label(),
///         onclick: move |_| open_certificate(index),
///         "{cert.title}"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = class_list(props.variant.class(), props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "{props.button_type}",
            style: props.style.clone(),
            "aria-label": props.aria_label.clone(),
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Icon button for compact actions (close, theme toggle)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content (character or element)
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// `aria-pressed` for toggle buttons
    #[props(default)]
    pub aria_pressed: Option<String>,
    /// Receives the mounted element so callers can move focus to it
    #[props(default)]
    pub onmounted: Option<EventHandler<MountedEvent>>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = class_list("icon-btn", props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            "aria-pressed": props.aria_pressed.clone(),
            onmounted: move |e| {
                if let Some(handler) = &props.onmounted {
                    handler.call(e);
                }
            },
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(
    onclick: EventHandler<()>,
    #[props(default)] onmounted: Option<EventHandler<MountedEvent>>,
) -> Element {
    rsx! {
        IconButton {
            onclick: onclick,
            onmounted: onmounted,
            aria_label: "Close".to_string(),
            class: "close-btn".to_string(),
            "\u{00D7}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn-primary");
        assert_eq!(ButtonVariant::Ghost.class(), "btn-ghost");
        assert_eq!(ButtonVariant::Chip.class(), "btn-chip");
        assert_eq!(ButtonVariant::Floating.class(), "btn-floating");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn class_list_joins_extra() {
        assert_eq!(class_list("icon-btn", None), "icon-btn");
        assert_eq!(class_list("icon-btn", Some("  ")), "icon-btn");
        assert_eq!(class_list("icon-btn", Some("close-btn")), "icon-btn close-btn");
    }
}
