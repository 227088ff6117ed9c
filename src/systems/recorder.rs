//! Trajectory recorder.
//!
//! Captures the two series a dashboard plots (influence-weighted adoption and
//! share of adopters) while the run progresses. The hook is moved into the
//! simulation, so it writes through a shared [`Trajectory`] handle the caller
//! keeps.

use std::cell::RefCell;
use std::rc::Rc;

use crate::simulation::RoundRecord;
use crate::systems::sdk::Hook;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrajectoryPoint {
    pub round: u32,
    pub weighted_adoption: f64,
    pub adoption_fraction: f64,
    pub adopters: usize,
}

pub type Trajectory = Rc<RefCell<Vec<TrajectoryPoint>>>;

#[derive(Clone, Debug)]
pub struct Recorder {
    cutoff: f64,
    out: Trajectory,
}

impl Recorder {
    /// A recorder and the handle its points are written to.
    pub fn new(cutoff: f64) -> (Self, Trajectory) {
        let out: Trajectory = Rc::new(RefCell::new(Vec::new()));
        (Self { cutoff, out: Rc::clone(&out) }, out)
    }
}

impl Hook for Recorder {
    fn on_round(&mut self, record: &RoundRecord) {
        let adopters = record.countries.iter().filter(|c| c.is_adopter(self.cutoff)).count();
        self.out.borrow_mut().push(TrajectoryPoint {
            round: record.round,
            weighted_adoption: record.signal.weighted_adoption,
            adoption_fraction: record.signal.adoption_fraction,
            adopters,
        });
    }
}
