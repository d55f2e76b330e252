/// Forward Euler integrator for the Mackey-Glass delay differential
/// equation
///
/// `dx/dt = beta * x_tau / (1 + x_tau^n) - gamma * x`
///
/// where `x_tau` is the value `tau` time units in the past. The delay is
/// realized as an index lookup `round(tau / dt)` samples back, clamped to
/// the start of the series while the history is still shorter than the
/// delay.
#[derive(Debug, Clone)]
pub struct MackeyGlass {
    /// Production rate
    pub beta: f64,
    /// Decay rate
    pub gamma: f64,
    /// Nonlinearity exponent
    pub n: f64,
    /// Delay in time units; `tau >= 17` gives chaotic behaviour for the
    /// canonical parameter set
    pub tau: f64,
    /// Output scale applied to the whole series
    pub amplitude: f64,
    /// Integration step size
    pub dt: f64,
}

impl Default for MackeyGlass {
    fn default() -> Self {
        Self {
            beta: 0.2,
            gamma: 0.1,
            n: 10.0,
            tau: 17.0,
            amplitude: 1.0,
            dt: 1.0,
        }
    }
}

impl MackeyGlass {
    /// Integrate `steps` samples starting from the constant value `x0`
    pub fn generate(&self, x0: f64, steps: usize) -> Vec<f64> {
        let lag = (self.tau / self.dt).round() as usize;

        let mut series = Vec::with_capacity(steps);
        if steps == 0 {
            return series;
        }
        series.push(x0);

        for t in 1..steps {
            let prev = series[t - 1];
            // clamp the delayed lookup to index 0 until the history is
            // long enough
            let delayed = series[t.saturating_sub(lag).min(t - 1)];

            let delta =
                self.beta * delayed / (1.0 + delayed.powf(self.n)) - self.gamma * prev;
            series.push(prev + self.dt * delta);
        }

        if self.amplitude != 1.0 {
            series.iter_mut().for_each(|v| *v *= self.amplitude);
        }

        series
    }
}
