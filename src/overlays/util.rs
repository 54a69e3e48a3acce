use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
};

pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

pub fn shortcut_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::raw("    "),
        Span::styled(format!("[{key}]"), Style::default().fg(Color::Yellow)),
        Span::raw(format!(" {description}")),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_fits_inside_small_area() {
        let area = Rect::new(0, 0, 20, 5);
        let rect = centered_rect(area, 30, 10);
        assert_eq!(rect, area);
    }

    #[test]
    fn centered_rect_is_centered() {
        let rect = centered_rect(Rect::new(0, 0, 40, 20), 20, 10);
        assert_eq!(rect, Rect::new(10, 5, 20, 10));
    }
}
