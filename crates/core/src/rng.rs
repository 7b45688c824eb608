use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

#[derive(Debug, Clone)]
pub struct RngState {
    seed: u64,
    rng: StdRng,
}

impl RngState {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self::from_seed(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    pub fn shuffled<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut out = items.to_vec();
        self.shuffle(&mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_order() {
        let mut a: Vec<u32> = (0..40).collect();
        let mut b = a.clone();
        RngState::from_seed(11).shuffle(&mut a);
        RngState::from_seed(11).shuffle(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn shuffled_keeps_every_item() {
        let items: Vec<u32> = (0..60).collect();
        let mut out = RngState::from_seed(3).shuffled(&items);
        out.sort_unstable();
        assert_eq!(out, items);
    }
}
