use serde::{Deserialize, Serialize};

/// Population sizing for the (μ+λ) strategy: `mu` elites survive each
/// generation, and the initial pool holds `mu + lambda` individuals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub struct Strategy {
    mu: u32,
    lambda: u32,
}

#[derive(Debug, thiserror::Error)]
#[cfg_attr(test, derive(PartialEq, Eq))]
#[error("mu and lambda must be positive, got mu={mu}, lambda={lambda}")]
pub struct InvalidConfiguration {
    pub mu: u32,
    pub lambda: u32,
}

impl Strategy {
    pub fn new(mu: u32, lambda: u32) -> Result<Self, InvalidConfiguration> {
        if mu == 0 || lambda == 0 {
            return Err(InvalidConfiguration { mu, lambda });
        }

        Ok(Self { mu, lambda })
    }

    pub fn mu(&self) -> usize {
        self.mu as usize
    }

    pub fn lambda(&self) -> usize {
        self.lambda as usize
    }

    /// Size of the seeded population.
    pub(crate) fn initial_size(&self) -> usize {
        self.mu as usize + self.lambda as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructor_sets_parameters() {
        let strategy = Strategy::new(50, 50).expect("is valid");

        assert_eq!(strategy.mu(), 50);
        assert_eq!(strategy.lambda(), 50);
        assert_eq!(strategy.initial_size(), 100);
    }

    #[test]
    fn zero_mu_is_rejected() {
        assert_eq!(
            Strategy::new(0, 10),
            Err(InvalidConfiguration { mu: 0, lambda: 10 })
        );
    }

    #[test]
    fn zero_lambda_is_rejected() {
        assert_eq!(
            Strategy::new(10, 0),
            Err(InvalidConfiguration { mu: 10, lambda: 0 })
        );
    }
}
