/// Integration tests running the full service graph on local disk storage
mod utils;

use catalog_admin_lib::modules::video::application::{
    DeleteVideoCommand, GetMediaQuery, GetVideoQuery,
};
use catalog_admin_lib::shared::application::{Query, UseCase};
use tempfile::TempDir;
use tokio_test::assert_ok;
use utils::{
    factories::{ResourceFactory, VideoFactory},
    helpers,
};

#[tokio::test]
async fn created_media_is_written_below_storage_root() {
    let dir = TempDir::new().unwrap();
    let test = helpers::build_local_test_services(dir.path());

    let command = VideoFactory::new()
        .with_video(ResourceFactory::video())
        .with_banner(ResourceFactory::image("banner.png"))
        .create_command();
    let created = assert_ok!(test.services.create_video.execute(command).await);

    let folder = dir.path().join(format!("videoId-{}", created.id));
    let raw = tokio::fs::read(folder.join("type-VIDEO")).await.unwrap();
    assert_eq!(raw, b"raw video bytes".to_vec());
    assert!(folder.join("type-BANNER").exists());

    let media = assert_ok!(
        test.services
            .get_media
            .execute(GetMediaQuery::new(created.id.clone(), "VIDEO"))
            .await
    );
    assert_eq!(media.name, "video.mp4");
    assert_eq!(media.content_type, "video/mp4");

    let video = assert_ok!(
        test.services
            .get_video
            .execute(GetVideoQuery::new(created.id))
            .await
    );
    assert_eq!(video.banner.unwrap().name, "banner.png");
}

#[tokio::test]
async fn deleting_video_removes_its_folder_contents() {
    let dir = TempDir::new().unwrap();
    let test = helpers::build_local_test_services(dir.path());

    let command = VideoFactory::new()
        .with_resources(ResourceFactory::all())
        .create_command();
    let created = assert_ok!(test.services.create_video.execute(command).await);
    let folder = dir.path().join(format!("videoId-{}", created.id));
    assert!(folder.join("type-TRAILER").exists());

    assert_ok!(
        test.services
            .delete_video
            .execute(DeleteVideoCommand::new(created.id))
            .await
    );

    for media_type in ["VIDEO", "TRAILER", "BANNER", "THUMBNAIL", "THUMBNAIL_HALF"] {
        assert!(!folder.join(format!("type-{}", media_type)).exists());
    }
}
