/// Integration tests for updating an existing video
mod utils;

use catalog_admin_lib::modules::video::application::GetVideoQuery;
use catalog_admin_lib::modules::video::domain::{MediaStatus, Resource};
use catalog_admin_lib::shared::application::{Query, UseCase};
use tokio_test::{assert_err, assert_ok};
use utils::{
    factories::{ResourceFactory, VideoFactory},
    helpers,
};

#[tokio::test]
async fn update_replaces_metadata_and_clears_slots_without_resource() {
    let mut test = helpers::build_test_services();
    test.register_cast_members(&["cm-1"]);

    let command = VideoFactory::new()
        .with_video(ResourceFactory::video())
        .create_command();
    let created = assert_ok!(test.services.create_video.execute(command).await);
    let before = assert_ok!(
        test.services
            .get_video
            .execute(GetVideoQuery::new(created.id.clone()))
            .await
    );
    assert!(before.video.is_some());
    test.drain_events();

    let update = VideoFactory::new()
        .with_title("Renamed")
        .with_rating(Some("18"))
        .with_cast_members(&["cm-1"])
        .with_banner(ResourceFactory::image("banner.png"))
        .update_command(&created.id);
    let updated = assert_ok!(test.services.update_video.execute(update).await);
    assert_eq!(updated.id, created.id);

    let after = assert_ok!(
        test.services
            .get_video
            .execute(GetVideoQuery::new(created.id.clone()))
            .await
    );
    assert_eq!(after.title, "Renamed");
    assert_eq!(after.rating.as_deref(), Some("18"));
    assert_eq!(after.cast_members, vec!["cm-1".to_string()]);
    assert_eq!(after.created_at, before.created_at);
    assert!(after.updated_at >= before.updated_at);

    // Only the supplied banner is kept; the raw video was not resent
    assert!(after.video.is_none());
    assert!(after.banner.is_some());
    assert!(test.drain_events().is_empty());
}

#[tokio::test]
async fn update_with_title_only_empties_every_slot() {
    let test = helpers::build_test_services();

    let command = VideoFactory::new()
        .with_resources(ResourceFactory::all())
        .create_command();
    let created = assert_ok!(test.services.create_video.execute(command).await);

    let update = VideoFactory::new()
        .with_title("Title only")
        .update_command(&created.id);
    assert_ok!(test.services.update_video.execute(update).await);

    let after = assert_ok!(
        test.services
            .get_video
            .execute(GetVideoQuery::new(created.id))
            .await
    );
    assert_eq!(after.title, "Title only");
    assert!(after.video.is_none());
    assert!(after.trailer.is_none());
    assert!(after.banner.is_none());
    assert!(after.thumbnail.is_none());
    assert!(after.thumbnail_half.is_none());
}

#[tokio::test]
async fn update_with_new_raw_video_restarts_encoding() {
    let mut test = helpers::build_test_services();

    let created = assert_ok!(
        test.services
            .create_video
            .execute(
                VideoFactory::new()
                    .with_video(ResourceFactory::video())
                    .create_command()
            )
            .await
    );
    test.drain_events();

    let replacement = Resource::of(b"second cut".to_vec(), "video/mp4", "second.mp4");
    let update = VideoFactory::new()
        .with_video(replacement.clone())
        .update_command(&created.id);
    assert_ok!(test.services.update_video.execute(update).await);

    let video = assert_ok!(
        test.services
            .get_video
            .execute(GetVideoQuery::new(created.id.clone()))
            .await
    );
    let media = video.video.unwrap();
    assert_eq!(media.checksum, replacement.checksum());
    assert_eq!(media.status, MediaStatus::Pending);

    let events = test.drain_events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["resourceId"], media.id);
    assert_eq!(events[0]["filePath"], media.raw_location);
}

#[tokio::test]
async fn update_unknown_video_is_not_found() {
    let test = helpers::build_test_services();

    let err = assert_err!(
        test.services
            .update_video
            .execute(VideoFactory::new().update_command("missing"))
            .await
    );

    assert!(err.is_not_found());
}

#[tokio::test]
async fn update_with_invalid_fields_leaves_video_unchanged() {
    let test = helpers::build_test_services();

    let created = assert_ok!(
        test.services
            .create_video
            .execute(VideoFactory::new().with_title("Original").create_command())
            .await
    );

    let update = VideoFactory::new()
        .with_title("   ")
        .with_genres(&["g-unknown"])
        .update_command(&created.id);
    let err = assert_err!(test.services.update_video.execute(update).await);

    assert_eq!(err.to_string(), "Could not update Aggregate Video");
    assert_eq!(err.errors().len(), 2);
    assert_eq!(
        err.errors()[0].message,
        "Some genres could not be found: g-unknown"
    );
    assert_eq!(err.errors()[1].message, "'title' should not be empty");

    let stored = assert_ok!(
        test.services
            .get_video
            .execute(GetVideoQuery::new(created.id))
            .await
    );
    assert_eq!(stored.title, "Original");
    assert!(stored.genres.is_empty());
}
