//! The random-source contract consumed by world generation

use std::f64::consts::PI;

/// A deterministic source of random draws
///
/// Implementors only need [`RandomSource::unit`]; every distribution is built
/// on top of it, so two sources in identical state produce identical output
/// for every method.
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`
    fn unit(&mut self) -> f64;

    /// Uniform draw in `[min, max)`
    fn uniform(&mut self, min: f64, max: f64) -> f64 {
        min + (max - min) * self.unit()
    }

    /// Sample from a Gaussian (normal) distribution using the Box-Muller transform
    ///
    /// # Arguments
    /// * `mean` - Mean of the distribution
    /// * `std_dev` - Standard deviation
    fn gaussian(&mut self, mean: f64, std_dev: f64) -> f64 {
        // 1 - u keeps the log argument in (0, 1]
        let u1 = 1.0 - self.unit();
        let u2 = self.unit();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
        mean + std_dev * z
    }

    /// Log-normal draw: `exp(mu_log + sigma_log · z)` with `z ~ N(0, 1)`
    ///
    /// Suited to multiplicative processes; the result is always positive.
    fn log_normal(&mut self, mu_log: f64, sigma_log: f64) -> f64 {
        (mu_log + sigma_log * self.gaussian(0.0, 1.0)).exp()
    }

    /// Poisson-distributed count (Knuth's multiplication method)
    ///
    /// Non-positive rates always yield zero.
    fn poisson(&mut self, lambda: f64) -> u64 {
        if lambda <= 0.0 {
            return 0;
        }
        let limit = (-lambda).exp();
        let mut k = 0;
        let mut p = 1.0;
        loop {
            p *= self.unit();
            if p <= limit {
                return k;
            }
            k += 1;
        }
    }

    /// Index drawn with probability proportional to `weights[i]`
    ///
    /// Negative and non-finite weights count as zero. Returns `None` when no
    /// weight is positive.
    fn weighted_index(&mut self, weights: &[f64]) -> Option<usize> {
        let usable = |w: f64| if w.is_finite() && w > 0.0 { w } else { 0.0 };
        let total: f64 = weights.iter().copied().map(usable).sum();
        if total <= 0.0 {
            return None;
        }

        let target = self.unit() * total;
        let mut cumulative = 0.0;
        let mut last_positive = None;
        for (i, w) in weights.iter().copied().map(usable).enumerate() {
            if w == 0.0 {
                continue;
            }
            cumulative += w;
            last_positive = Some(i);
            if target < cumulative {
                return Some(i);
            }
        }
        // Rounding can leave target a hair above the running sum
        last_positive
    }

    /// Item drawn with probability proportional to its weight
    fn weighted_choice<'a, T>(&mut self, items: &'a [T], weights: &[f64]) -> Option<&'a T>
    where
        Self: Sized,
    {
        let n = items.len().min(weights.len());
        self.weighted_index(&weights[..n]).map(|i| &items[i])
    }

    /// In-place Fisher–Yates shuffle
    fn shuffle<T>(&mut self, items: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..items.len()).rev() {
            let j = ((self.unit() * (i + 1) as f64) as usize).min(i);
            items.swap(i, j);
        }
    }
}

/// A [`RandomSource`] that can be derived from a string key
///
/// Sessions build every scoped stream through this, so swapping the backing
/// generator only needs a new implementation here.
pub trait KeyedSource: RandomSource + Sized {
    fn from_key(key: &str) -> Self;
}
