use super::Vec2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntranceSignal {
    None,
    ShowPrompt(String),
    HidePrompt,
    /// The player confirmed; load this scene.
    Enter(String),
}

/// A dungeon door that offers a prompt while the player stands close by.
#[derive(Debug, Clone)]
pub struct DungeonEntrance {
    position: Vec2,
    detection_radius: f32,
    prompt: String,
    scene: String,
    player_nearby: bool,
}

impl DungeonEntrance {
    pub fn new(position: Vec2, scene: impl Into<String>) -> Self {
        Self {
            position,
            detection_radius: 2.0,
            prompt: "Appuyez sur ENTRÉE pour entrer dans le donjon".to_string(),
            scene: scene.into(),
            player_nearby: false,
        }
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.detection_radius = radius;
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn player_nearby(&self) -> bool {
        self.player_nearby
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Show/hide fire only when the player crosses the radius. Entering
    /// takes priority over a prompt change in the same frame.
    pub fn update(&mut self, player: Vec2, enter_pressed: bool) -> EntranceSignal {
        let in_range = self.position.distance(player) <= self.detection_radius;
        let changed = in_range != self.player_nearby;
        self.player_nearby = in_range;

        if in_range && enter_pressed {
            return EntranceSignal::Enter(self.scene.clone());
        }
        match (changed, in_range) {
            (true, true) => EntranceSignal::ShowPrompt(self.prompt.clone()),
            (true, false) => EntranceSignal::HidePrompt,
            _ => EntranceSignal::None,
        }
    }
}
