use crate::error::{AppResult, DomainError};
use crate::models::player::Player;
use crate::models::world::World;

/// The game session. There is only one, but it is passed around explicitly
/// instead of living in a global.
#[derive(Debug, Default)]
pub struct Session {
    player: Option<Player>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the player, handing back the one it replaces.
    fn replace(&mut self, player: Player) -> Option<Player> {
        self.player.replace(player)
    }

    pub fn player(&self) -> AppResult<&Player> {
        self.player.as_ref().ok_or(DomainError::MissingPlayer)
    }

    pub fn player_mut(&mut self) -> AppResult<&mut Player> {
        self.player.as_mut().ok_or(DomainError::MissingPlayer)
    }
}

/// Everything a request can touch: the world and the session playing in it.
#[derive(Debug)]
pub struct Game {
    pub world: World,
    pub session: Session,
}

impl Game {
    pub fn new(world: World) -> Self {
        Self {
            world,
            session: Session::new(),
        }
    }

    /// Starts playing. A second join replaces the previous player, whose
    /// inventory is left on the floor of the room they were standing in.
    pub fn join(&mut self, player: Player) -> AppResult<&Player> {
        if let Some(old) = self.session.replace(player) {
            let room = self.world.room_mut(old.current_room_id())?;
            for item in old.into_inventory() {
                room.items.insert(item);
            }
        }
        self.session.player()
    }

    /// Splits the borrow so player operations can mutate the world.
    pub fn parts_mut(&mut self) -> AppResult<(&mut Player, &mut World)> {
        let player = self.session.player_mut()?;
        Ok((player, &mut self.world))
    }
}
