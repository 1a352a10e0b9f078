use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (file name without .svg)
    name: &'static str,
    /// CSS classes
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

/// Icons referenced by the pages
pub mod icons {
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const CHECK: &str = "check";
    pub const KEY: &str = "key";
    pub const LIGHTNING: &str = "lightning";
    pub const SEARCH: &str = "search";
    pub const TABLE: &str = "table";

    pub const ALL: [&str; 6] = [ALERT_CIRCLE, CHECK, KEY, LIGHTNING, SEARCH, TABLE];
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_every_icon_ships_an_svg_asset() {
        let icons_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("public/icons");

        for name in icons::ALL {
            let file = icons_dir.join(format!("{}.svg", name));
            let svg = std::fs::read_to_string(&file)
                .unwrap_or_else(|e| panic!("missing icon {}: {}", file.display(), e));
            assert!(svg.contains("<svg"), "{name} is not an svg");
        }
    }

    #[test]
    fn test_icon_points_at_public_asset() {
        let owner = Owner::new_root(None);
        let html = owner.with(|| view! { <Icon name=icons::CHECK /> }.to_html());

        assert!(html.contains("src=\"/icons/check.svg\""));
    }

    #[test]
    fn test_stylesheet_source_exists() {
        let style = Path::new(env!("CARGO_MANIFEST_DIR")).join("style/output.css");
        assert!(style.is_file(), "missing {}", style.display());
    }
}
