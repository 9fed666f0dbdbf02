/// Part destruction subscriptions.

use super::keys::PartKey;

/// Dynamic "part about to be destroyed" wiring.
///
/// After `subscribe_part_destroyed(p)` the host calls
/// `CameraController::on_part_destroyed(ctx, p)` just before `p` goes away,
/// until the matching unsubscribe.
pub trait PartEvents {
    fn subscribe_part_destroyed(&mut self, part: PartKey);
    fn unsubscribe_part_destroyed(&mut self, part: PartKey);
}
