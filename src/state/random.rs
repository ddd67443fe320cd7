/// Source of uniform draws in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Browser `Math.random`; unseeded, so every mount differs.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsRandom;

impl RandomSource for JsRandom {
    fn next_unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

/// Seeded generator for repeatable sampling.
#[cfg(test)]
pub struct Seeded(rand::rngs::StdRng);

#[cfg(test)]
impl Seeded {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

#[cfg(test)]
impl RandomSource for Seeded {
    fn next_unit(&mut self) -> f64 {
        use rand::Rng;
        self.0.gen_range(0.0..1.0)
    }
}

/// Replays a fixed sequence, cycling when exhausted.
#[cfg(test)]
pub struct Scripted {
    values: Vec<f64>,
    pos: usize,
}

#[cfg(test)]
impl Scripted {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, pos: 0 }
    }
}

#[cfg(test)]
impl RandomSource for Scripted {
    fn next_unit(&mut self) -> f64 {
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v
    }
}
