use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_random(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.random_bool(p)
    }

    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }
}
