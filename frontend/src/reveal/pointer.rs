/// Last known pointer position in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerGlow {
    pub x: f64,
    pub y: f64,
}

impl PointerGlow {
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    pub fn gradient(&self, radius_px: u32, alpha: f64) -> String {
        format!(
            "background: radial-gradient(circle {}px at {}px {}px, rgba(255, 255, 255, {}), transparent 80%);",
            radius_px, self.x, self.y, alpha
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_origin() {
        assert_eq!(PointerGlow::default(), PointerGlow { x: 0.0, y: 0.0 });
    }

    #[test]
    fn keeps_the_last_position() {
        let mut glow = PointerGlow::default();
        glow.move_to(10.0, 20.0);
        glow.move_to(300.5, 42.0);
        assert_eq!(glow, PointerGlow { x: 300.5, y: 42.0 });
        assert_eq!(
            glow.gradient(300, 0.08),
            "background: radial-gradient(circle 300px at 300.5px 42px, rgba(255, 255, 255, 0.08), transparent 80%);"
        );
    }
}
