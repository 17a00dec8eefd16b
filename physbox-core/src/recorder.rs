/// One telemetry point for plotting
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time: f32,
    pub distance: f32,
    pub velocity: f32,
    pub acceleration: f32,
}

/// Append-only telemetry log consumed read-only by the plotting host.
///
/// The log grows for the lifetime of a run; nothing is evicted or windowed.
/// Only an explicit reset clears it.
#[derive(Debug, Default)]
pub struct SampleRecorder {
    samples: Vec<Sample>,
}

impl SampleRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, time: f32, distance: f32, velocity: f32, acceleration: f32) {
        self.samples.push(Sample {
            time,
            distance,
            velocity,
            acceleration,
        });
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
