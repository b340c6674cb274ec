//! Validates a few sign-up requests and prints what happened to each.
//!
//! Run with: cargo run --example registration
//!
//! Every outcome built along the way is logged through `tracing`. Raise the
//! max level below to TRACE to see the `OK` records as well.

use trackline::prelude::*;

#[derive(Debug)]
struct Registration {
    email: EmailAddress,
    avatar: FileExtension,
    display_name: String,
}

fn register(email: &str, avatar_ext: &str, display_name: Option<&str>) -> Outcome<Registration> {
    EmailAddress::create(email)
        .with_note(format!("sign-up request for {email:?}"))
        .on_success_try(|email| {
            FileExtension::create(avatar_ext)
                .ensure(
                    |ext| ["PNG", "JPG", "GIF"].contains(&ext.as_str()),
                    "Avatars must be PNG, JPG or GIF",
                )
                .on_success(|avatar| (email, avatar))
        })
        .on_success_try(|(email, avatar)| {
            Maybe::new(display_name)
                .map(str::to_owned)
                .into_outcome("A display name is required")
                .ensure(|name| name.chars().count() <= 20, "Display name is too long")
                .on_success(|display_name| Registration {
                    email,
                    avatar,
                    display_name,
                })
        })
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let requests = [
        ("ada@example.com", "*.png", Some("Ada")),
        ("grace@navy.mil", "bmp", Some("Grace")),
        ("@nowhere", "png", Some("Nobody")),
        ("linus@kernel.org", "jpg", None),
    ];

    for (email, ext, name) in requests {
        let _ = register(email, ext, name)
            .on_success_tap(|r| {
                tracing::info!(
                    "registered {} as {:?} with a {} avatar",
                    r.email,
                    r.display_name,
                    r.avatar
                )
            })
            .on_failure(|error| tracing::warn!("rejected {email}: {error}"))
            .on_both(|outcome| {
                for note in outcome.notes() {
                    tracing::debug!("note: {note}");
                }
            })
            .on_both_do(|| println!("---"));
    }
}
