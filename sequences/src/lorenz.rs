/// Forward Euler integrator for the Lorenz system
///
/// `dx = sigma (y - x)`, `dy = x (rho - z) - y`, `dz = x y - beta z`
#[derive(Debug, Clone)]
pub struct Lorenz {
    /// Prandtl-number parameter
    pub sigma: f64,
    /// Rayleigh-number parameter
    pub rho: f64,
    /// Geometry parameter
    pub beta: f64,
    /// Integration step size
    pub dt: f64,
}

impl Default for Lorenz {
    fn default() -> Self {
        Self {
            sigma: 10.0,
            rho: 28.0,
            beta: 8.0 / 3.0,
            dt: 0.01,
        }
    }
}

impl Lorenz {
    /// Integrate `steps` steps starting from `initial`, returning the
    /// three equal-length coordinate series
    pub fn generate(&self, initial: [f64; 3], steps: usize) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        let mut xs = Vec::with_capacity(steps);
        let mut ys = Vec::with_capacity(steps);
        let mut zs = Vec::with_capacity(steps);

        let (mut x, mut y, mut z) = (initial[0], initial[1], initial[2]);
        for _ in 0..steps {
            let dx = self.sigma * (y - x);
            let dy = x * (self.rho - z) - y;
            let dz = x * y - self.beta * z;

            x += self.dt * dx;
            y += self.dt * dy;
            z += self.dt * dz;

            xs.push(x);
            ys.push(y);
            zs.push(z);
        }

        (xs, ys, zs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_series_share_length() {
        let (xs, ys, zs) = Lorenz::default().generate([1.0, 1.0, 1.0], 500);
        assert_eq!(xs.len(), 500);
        assert_eq!(ys.len(), 500);
        assert_eq!(zs.len(), 500);
    }

    #[test]
    fn integration_is_deterministic() {
        let gen = Lorenz::default();
        let a = gen.generate([1.0, 1.0, 1.0], 200);
        let b = gen.generate([1.0, 1.0, 1.0], 200);
        assert_eq!(a, b);
    }

    #[test]
    fn trajectory_stays_finite_on_the_attractor() {
        let (xs, ys, zs) = Lorenz::default().generate([1.0, 1.0, 1.0], 5000);
        assert!(xs.iter().chain(&ys).chain(&zs).all(|v| v.is_finite()));
        // the attractor keeps coordinates well inside this box
        assert!(xs.iter().all(|v| v.abs() < 100.0));
    }
}
