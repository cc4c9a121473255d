use crate::app::App;
use crate::mpris::MprisHandle;

pub fn update_mpris(mpris: &MprisHandle, app: &App) {
    let snapshot = app.playback_snapshot();
    let track = snapshot.as_ref().and_then(|info| info.track.as_ref());
    let length_micros = snapshot.as_ref().and_then(|info| {
        (info.duration_millis > 1).then(|| (info.duration_millis as i64).saturating_mul(1000))
    });

    mpris.set_track_metadata(track, length_micros);
    mpris.set_playback(app.playback);
}
