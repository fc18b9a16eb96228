use crate::core::data::complex::Complex;
use crate::core::data::plane_region::PlaneRegion;
use crate::core::zoom::budget::IterationBudgetPolicy;
use crate::core::zoom::errors::ZoomError;
use crate::core::zoom::shrink::shrink_region;

/// One step of a zoom animation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frame {
    pub index: u32,
    pub region: PlaneRegion,
    pub max_iterations: u32,
}

/// Frames after the first, each shrunk toward a fixed focus with a budget
/// from `policy`. Ends after `frame_count` frames in total (counting the
/// first), or right after yielding an error.
#[derive(Debug)]
pub struct FrameSequence<B: IterationBudgetPolicy> {
    previous: Frame,
    focus: Complex,
    shrink_percent: f64,
    frame_count: u32,
    policy: B,
    finished: bool,
}

impl<B: IterationBudgetPolicy> FrameSequence<B> {
    pub fn new(
        first: Frame,
        focus: Complex,
        shrink_percent: f64,
        frame_count: u32,
        policy: B,
    ) -> Result<Self, ZoomError> {
        if !(0.0..100.0).contains(&shrink_percent) {
            return Err(ZoomError::InvalidShrinkPercent(shrink_percent));
        }

        Ok(Self {
            previous: first,
            focus,
            shrink_percent,
            frame_count,
            policy,
            finished: false,
        })
    }

    #[must_use]
    pub fn focus(&self) -> Complex {
        self.focus
    }
}

impl<B: IterationBudgetPolicy> Iterator for FrameSequence<B> {
    type Item = Result<Frame, ZoomError>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.previous.index + 1;

        if self.finished || index >= self.frame_count {
            return None;
        }

        let region = match shrink_region(self.previous.region, self.focus, self.shrink_percent) {
            Ok(region) => region,
            Err(err) => {
                self.finished = true;
                return Some(Err(err));
            }
        };

        let frame = Frame {
            index,
            region,
            max_iterations: self
                .policy
                .budget_for_frame(self.previous.max_iterations, index),
        };

        self.previous = frame;
        Some(Ok(frame))
    }
}
