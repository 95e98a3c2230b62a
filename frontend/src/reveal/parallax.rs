use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Fixed per-element coefficient scaling scroll offset into a vertical shift.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxBinding {
    factor: f64,
}

impl ParallaxBinding {
    pub fn new(factor: f64) -> Self {
        Self { factor }
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    pub fn translate(&self, scroll_offset: f64) -> f64 {
        scroll_offset * self.factor
    }

    pub fn transform(&self, scroll_offset: f64) -> String {
        format!("translateY({}px)", self.translate(scroll_offset))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    pub min_factor: f64,
    pub max_factor: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            min_factor: 0.0,
            max_factor: 0.2,
        }
    }
}

/// Shape of a decorative particle field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldSpec {
    pub count: usize,
    pub min_size_px: f64,
    pub max_size_px: f64,
    pub parallax: ParallaxConfig,
}

/// A decorative particle. Every value is drawn once at creation.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub top_pct: f64,
    pub left_pct: f64,
    pub width_px: f64,
    pub height_px: f64,
    pub float_secs: f64,
    pub delay_secs: f64,
    pub binding: ParallaxBinding,
}

impl Particle {
    pub fn style(&self, scroll_offset: f64) -> String {
        format!(
            "top: {:.2}%; left: {:.2}%; width: {:.0}px; height: {:.0}px; transform: {}; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.top_pct,
            self.left_pct,
            self.width_px,
            self.height_px,
            self.binding.transform(scroll_offset),
            self.float_secs,
            self.delay_secs,
        )
    }
}

fn draw(rng: &mut SmallRng, low: f64, high: f64) -> f64 {
    let (low, high) = if low <= high { (low, high) } else { (high, low) };
    if low == high {
        return low;
    }
    rng.gen_range(low..=high)
}

pub fn particle_field(spec: FieldSpec, seed: u64) -> Vec<Particle> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..spec.count)
        .map(|_| {
            let width_px = draw(&mut rng, spec.min_size_px, spec.max_size_px);
            let height_px = draw(&mut rng, spec.min_size_px, spec.max_size_px);
            Particle {
                top_pct: draw(&mut rng, 0.0, 100.0),
                left_pct: draw(&mut rng, 0.0, 100.0),
                width_px,
                height_px,
                float_secs: draw(&mut rng, 5.0, 10.0),
                delay_secs: draw(&mut rng, 0.0, 2.0),
                binding: ParallaxBinding::new(draw(
                    &mut rng,
                    spec.parallax.min_factor,
                    spec.parallax.max_factor,
                )),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(count: usize) -> FieldSpec {
        FieldSpec {
            count,
            min_size_px: 50.0,
            max_size_px: 250.0,
            parallax: ParallaxConfig {
                min_factor: 0.05,
                max_factor: 0.2,
            },
        }
    }

    #[test]
    fn zero_offset_means_zero_translation() {
        for factor in [0.0, 0.05, 0.2, 1.5] {
            assert_eq!(ParallaxBinding::new(factor).translate(0.0), 0.0);
        }
    }

    #[test]
    fn translation_is_linear_in_offset() {
        let binding = ParallaxBinding::new(0.1);
        assert!((binding.translate(100.0) - 10.0).abs() < 1e-9);
        assert!((binding.translate(200.0) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn transform_is_css() {
        assert_eq!(ParallaxBinding::new(0.5).transform(40.0), "translateY(20px)");
    }

    #[test]
    fn field_values_stay_in_range() {
        let field = particle_field(spec(15), 7);
        assert_eq!(field.len(), 15);
        for p in &field {
            assert!((0.05..=0.2).contains(&p.binding.factor()));
            assert!((50.0..=250.0).contains(&p.width_px));
            assert!((0.0..=100.0).contains(&p.top_pct));
            assert!((5.0..=10.0).contains(&p.float_secs));
        }
    }

    #[test]
    fn same_seed_same_field() {
        assert_eq!(particle_field(spec(4), 42), particle_field(spec(4), 42));
    }

    #[test]
    fn degenerate_ranges_do_not_panic() {
        let field = particle_field(
            FieldSpec {
                count: 3,
                min_size_px: 8.0,
                max_size_px: 8.0,
                parallax: ParallaxConfig {
                    min_factor: 0.3,
                    max_factor: 0.1,
                },
            },
            1,
        );
        for p in field {
            assert_eq!(p.width_px, 8.0);
            assert!((0.1..=0.3).contains(&p.binding.factor()));
        }
    }
}
