use crate::Direction;

/// Minimum travel in pixels before a gesture's direction is locked.
pub(crate) const LOCK_DISTANCE: f64 = 10.0;

/// Converts raw pointer positions into per-gesture deltas and a sticky direction
/// classification.
///
/// Purely geometric: it holds no timing state and decides nothing about scrolling.
/// `begin` resets it for a new gesture; `update` recomputes the deltas relative to
/// the origin and locks the direction once movement leaves the dead zone.
#[derive(Clone, Copy, Debug, Default)]
pub struct TouchTracker {
    start_x: f64,
    start_y: f64,
    delta_x: f64,
    delta_y: f64,
    direction: Option<Direction>,
}

impl TouchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a gesture at the given pointer position, resetting deltas and direction.
    pub fn begin(&mut self, x: f64, y: f64) {
        self.start_x = x;
        self.start_y = y;
        self.delta_x = 0.0;
        self.delta_y = 0.0;
        self.direction = None;
    }

    /// Updates deltas for the current pointer position and returns the (possibly just
    /// locked) direction.
    ///
    /// The direction locks to whichever axis first travels beyond the dead zone and
    /// stays locked for the rest of the gesture.
    pub fn update(&mut self, x: f64, y: f64) -> Option<Direction> {
        self.delta_x = x - self.start_x;
        self.delta_y = y - self.start_y;

        if self.direction.is_none() {
            self.direction = classify(self.delta_x, self.delta_y);
        }
        self.direction
    }

    pub fn delta_x(&self) -> f64 {
        self.delta_x
    }

    pub fn delta_y(&self) -> f64 {
        self.delta_y
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }
}

fn classify(delta_x: f64, delta_y: f64) -> Option<Direction> {
    let x = delta_x.abs();
    let y = delta_y.abs();

    if x > y && x > LOCK_DISTANCE {
        Some(Direction::Horizontal)
    } else if y > x && y > LOCK_DISTANCE {
        Some(Direction::Vertical)
    } else {
        None
    }
}
