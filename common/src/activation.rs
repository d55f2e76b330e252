/// The possible nonlinearities applied in the reservoir state update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Activation {
    /// The identity function
    Identity,
    /// The hyperbolic tangent, bounded in (-1, 1)
    #[default]
    Tanh,
    /// The rectified linear unit
    Relu,
}

impl Activation {
    /// Perform the activation function over all elements
    pub fn activate(&self, vals: &mut [f64]) {
        match self {
            Activation::Identity => {}
            Activation::Tanh => {
                for v in vals {
                    *v = v.tanh();
                }
            }
            Activation::Relu => {
                for v in vals {
                    if *v < 0.0 {
                        *v = 0.0;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tanh_stays_bounded() {
        let mut vals = vec![-50.0, -1.0, 0.0, 1.0, 50.0];
        Activation::Tanh.activate(&mut vals);
        assert!(vals.iter().all(|v| (-1.0..=1.0).contains(v)));
        assert_eq!(vals[2], 0.0);
    }

    #[test]
    fn identity_is_noop() {
        let mut vals = vec![-2.5, 0.0, 3.0];
        Activation::Identity.activate(&mut vals);
        assert_eq!(vals, vec![-2.5, 0.0, 3.0]);
    }
}
