// Small helpers shared by components

pub fn clog(msg: &str) {
    log::debug!("{}", msg);
}

/// `rgba`/hex color plus scale as an inline style for a grid cell.
pub fn cell_style(color: &str, scale: f64) -> String {
    format!(
        "width:100%; height:100%; border-radius:2px; background:{}; transform:scale({}); transition:background-color 0.4s ease-in-out, transform 0.4s ease-in-out;",
        color, scale
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_style_carries_color_and_scale() {
        let s = cell_style("transparent", 1.1);
        assert!(s.contains("background:transparent;"));
        assert!(s.contains("scale(1.1)"));
    }
}
