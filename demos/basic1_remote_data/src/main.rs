use crate::tracing_setup::tracing_init;
use futures_signals::signal::{Mutable, SignalExt};
use remotedata::{
    derive, fold, promise, Cases, DefaultCases, PromiseOptions, RemoteData, RemoteError,
};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

mod tracing_setup;

#[derive(Debug, Clone, PartialEq)]
struct Profile {
    name: String,
    followers: u64,
}

#[tokio::main]
async fn main() {
    tracing_init();

    info!("==========================================");
    warn!("example: promise resolving");

    let profile: Mutable<RemoteData<Profile>> = Mutable::new(RemoteData::NotAsked);
    show(&profile.get_cloned());

    let slot = profile.clone();
    let initial = promise(
        fetch_profile("ada", false),
        move |data| slot.set(data),
        PromiseOptions::new()
            .on_loading(|| info!("  Hook | loading"))
            .on_success(|profile: Profile| info!("  Hook | loaded {}", profile.name)),
    );
    info!("  Main thread | promise returned {:?}", initial);
    watch(&profile).await;

    let followers = derive(profile.get_cloned(), |profile| profile.followers);
    let summary = fold(
        followers,
        DefaultCases::new(|| "no followers yet".to_string())
            .success(|count: u64| format!("{count} followers")),
    );
    info!("  Main thread | {}", summary);

    info!("==========================================");
    warn!("example: promise rejecting");

    let profile: Mutable<RemoteData<Profile>> = Mutable::new(RemoteData::NotAsked);
    let slot = profile.clone();
    promise(
        fetch_profile("nobody", true),
        move |data| slot.set(data),
        PromiseOptions::new()
            .on_error(|reason: String| warn!("  Hook | raw reason: {}", reason)),
    );
    watch(&profile).await;

    info!("==========================================");
    info!("  Main thread | Finish");
}

async fn fetch_profile(name: &'static str, fail: bool) -> Result<Profile, String> {
    sleep(Duration::from_millis(300)).await;
    if fail {
        return Err(format!("profile {name} not found"));
    }
    Ok(Profile {
        name: name.to_string(),
        followers: 42,
    })
}

async fn watch(profile: &Mutable<RemoteData<Profile>>) {
    profile
        .signal_cloned()
        .stop_if(|data| data.is_complete())
        .for_each(|data| {
            show(&data);
            async {}
        })
        .await;
}

fn show(data: &RemoteData<Profile>) {
    let line = fold(
        data.as_ref(),
        Cases {
            not_asked: || "nothing requested".to_string(),
            loading: || "loading...".to_string(),
            error: |error: RemoteError| format!("failed: {error}"),
            success: |profile: &Profile| {
                format!("{} ({} followers)", profile.name, profile.followers)
            },
        },
    );
    info!("  Main thread | show state: {}", line);
}
