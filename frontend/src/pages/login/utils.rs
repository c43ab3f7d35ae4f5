/// Style for a decorative surface clipped to a right-anchored slanted
/// quad. Arguments are the left-edge positions of the top and bottom
/// corners, as viewport percentages.
pub fn clipped_panel_style(top_left_pct: u8, bottom_left_pct: u8) -> String {
    format!(
        "clip-path: polygon({}% 0, 100% 0, 100% 100%, {}% 100%)",
        top_left_pct, bottom_left_pct
    )
}

pub fn background_image_style(path: &str) -> String {
    format!("background-image: url('{}')", path)
}
