use super::Vec2;

const DEFAULT_MOVE_SPEED: f32 = 5.0;
const DEFAULT_FOOTSTEP_INTERVAL: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionState {
    Idle,
    Moving,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

/// What happened to the player during one update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerFrame {
    pub state: MotionState,
    /// Set only on the frame the state changed.
    pub entered: Option<MotionState>,
    pub moved: bool,
    pub footstep: bool,
}

#[derive(Debug, Clone)]
pub struct PlayerController {
    position: Vec2,
    move_speed: f32,
    facing: Facing,
    state: MotionState,
    footstep_interval: f32,
    footstep_timer: f32,
}

impl PlayerController {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            move_speed: DEFAULT_MOVE_SPEED,
            facing: Facing::Right,
            state: MotionState::Idle,
            footstep_interval: DEFAULT_FOOTSTEP_INTERVAL,
            footstep_timer: 0.0,
        }
    }

    pub fn with_move_speed(mut self, units_per_second: f32) -> Self {
        self.move_speed = units_per_second;
        self
    }

    pub fn with_footstep_interval(mut self, secs: f32) -> Self {
        self.footstep_interval = secs;
        self
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn state(&self) -> MotionState {
        self.state
    }

    /// Steps the player by one frame of `input`.
    ///
    /// The player only moves when `walkable` accepts the destination; a
    /// blocked step leaves the player idle in place.
    pub fn update(&mut self, input: Vec2, dt: f32, walkable: impl Fn(Vec2) -> bool) -> PlayerFrame {
        let direction = input.normalized();
        let mut moved = false;
        let mut footstep = false;

        let next_state = if direction == Vec2::ZERO {
            MotionState::Idle
        } else {
            let target = self
                .position
                .offset(direction.scaled(self.move_speed * dt));
            if walkable(target) {
                self.position = target;
                moved = true;
                MotionState::Moving
            } else {
                MotionState::Idle
            }
        };

        let entered = (next_state != self.state).then_some(next_state);
        self.state = next_state;

        if moved && self.footstep_timer <= 0.0 {
            footstep = true;
            self.footstep_timer = self.footstep_interval;
        }
        if self.footstep_timer > 0.0 {
            self.footstep_timer -= dt;
        }

        if input.x < 0.0 {
            self.facing = Facing::Left;
        } else if input.x > 0.0 {
            self.facing = Facing::Right;
        }

        PlayerFrame {
            state: self.state,
            entered,
            moved,
            footstep,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(_: Vec2) -> bool {
        true
    }

    #[test]
    fn moves_at_speed_along_normalized_input() {
        let mut player = PlayerController::new(Vec2::ZERO).with_move_speed(4.0);
        let frame = player.update(Vec2::new(10.0, 0.0), 0.5, open);
        assert!(frame.moved);
        assert_eq!(frame.entered, Some(MotionState::Moving));
        assert_eq!(player.position(), Vec2::new(2.0, 0.0));

        let frame = player.update(Vec2::new(1.0, 0.0), 0.5, open);
        assert_eq!(frame.entered, None);
        assert_eq!(frame.state, MotionState::Moving);
    }

    #[test]
    fn blocked_step_goes_idle_in_place() {
        let mut player = PlayerController::new(Vec2::new(1.0, 1.0));
        player.update(Vec2::new(0.0, 1.0), 0.1, open);
        let before = player.position();

        let frame = player.update(Vec2::new(0.0, 1.0), 0.1, |p| p.y < before.y);
        assert!(!frame.moved);
        assert_eq!(frame.entered, Some(MotionState::Idle));
        assert_eq!(player.position(), before);
    }

    #[test]
    fn no_input_means_idle() {
        let mut player = PlayerController::new(Vec2::ZERO);
        let frame = player.update(Vec2::ZERO, 0.1, open);
        assert_eq!(frame.state, MotionState::Idle);
        assert_eq!(frame.entered, None);
    }

    #[test]
    fn facing_follows_horizontal_input_only() {
        let mut player = PlayerController::new(Vec2::ZERO);
        player.update(Vec2::new(-1.0, 0.0), 0.1, open);
        assert_eq!(player.facing(), Facing::Left);
        player.update(Vec2::new(0.0, 1.0), 0.1, open);
        assert_eq!(player.facing(), Facing::Left);
        player.update(Vec2::new(1.0, -1.0), 0.1, open);
        assert_eq!(player.facing(), Facing::Right);
    }

    #[test]
    fn footsteps_follow_the_interval() {
        let mut player = PlayerController::new(Vec2::ZERO).with_footstep_interval(0.25);
        let steps: Vec<bool> = (0..6)
            .map(|_| player.update(Vec2::new(1.0, 0.0), 0.125, open).footstep)
            .collect();
        assert_eq!(steps, vec![true, false, true, false, true, false]);
    }
}
