use log::info;
use timber_data::sound::{Sound, SoundCategory};
use timber_util::math::position::BlockPos;
use uuid::Uuid;

/// Best-effort feedback to a player. Implementations swallow their own failures,
/// nothing that calls these depends on them succeeding.
pub trait Notifier {
    fn send_message(&mut self, player: &Uuid, message: &str);

    fn play_sound(
        &mut self,
        player: &Uuid,
        sound: Sound,
        category: SoundCategory,
        position: &BlockPos,
    );
}

/// Writes every notification to the log. Used when there is no client to talk to.
#[derive(Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn send_message(&mut self, player: &Uuid, message: &str) {
        info!("[to {player}] {message}");
    }

    fn play_sound(
        &mut self,
        player: &Uuid,
        sound: Sound,
        category: SoundCategory,
        position: &BlockPos,
    ) {
        info!(
            "[to {player}] plays {} ({}) at {position}",
            sound.to_name(),
            category.to_name()
        );
    }
}
