pub mod modules;
pub mod shared;

use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use modules::{
    catalog::{CastMemberId, CategoryId, GenreId, InMemoryIdRegistry},
    video::{
        application::{
            CreateVideoHandler, DeleteVideoHandler, EventPublisher, GetMediaHandler,
            GetVideoHandler, ListVideosHandler, RelatedAggregatesValidator,
            UpdateMediaStatusHandler, UpdateVideoHandler, UploadMediaHandler,
        },
        domain::{MediaResourceGateway, VideoGateway},
        infrastructure::{
            DefaultMediaResourceGateway, InMemoryStorageService, InMemoryVideoGateway,
            LocalStorageService, QueueEventPublisher, StorageService, VideoEncoderListener,
        },
    },
};
use shared::config::{AppConfig, StorageBackend};
use shared::utils::logger::init_logger;

/// Every use case of the service, wired to the configured adapters
pub struct CatalogServices {
    pub categories: Arc<InMemoryIdRegistry<CategoryId>>,
    pub genres: Arc<InMemoryIdRegistry<GenreId>>,
    pub cast_members: Arc<InMemoryIdRegistry<CastMemberId>>,
    pub videos: Arc<InMemoryVideoGateway>,
    pub media_resources: Arc<DefaultMediaResourceGateway>,

    pub create_video: Arc<CreateVideoHandler>,
    pub update_video: Arc<UpdateVideoHandler>,
    pub upload_media: Arc<UploadMediaHandler>,
    pub update_media_status: Arc<UpdateMediaStatusHandler>,
    pub get_video: Arc<GetVideoHandler>,
    pub list_videos: Arc<ListVideosHandler>,
    pub get_media: Arc<GetMediaHandler>,
    pub delete_video: Arc<DeleteVideoHandler>,
    pub encoder_listener: Arc<VideoEncoderListener>,
}

impl CatalogServices {
    /// Build the service graph. Media events are published as JSON on `events`.
    pub fn build(config: &AppConfig, events: mpsc::Sender<String>) -> Self {
        let storage: Arc<dyn StorageService> = match &config.storage.backend {
            StorageBackend::Memory => Arc::new(InMemoryStorageService::new()),
            StorageBackend::Local(root) => Arc::new(LocalStorageService::new(root.clone())),
        };

        let categories = Arc::new(InMemoryIdRegistry::<CategoryId>::new());
        let genres = Arc::new(InMemoryIdRegistry::<GenreId>::new());
        let cast_members = Arc::new(InMemoryIdRegistry::<CastMemberId>::new());
        let videos = Arc::new(InMemoryVideoGateway::new());
        let media_resources = Arc::new(DefaultMediaResourceGateway::new(storage, &config.storage));

        // Cast to trait objects for dependency injection
        let video_gateway: Arc<dyn VideoGateway> = videos.clone();
        let media_gateway: Arc<dyn MediaResourceGateway> = media_resources.clone();
        let event_publisher: Arc<dyn EventPublisher> = Arc::new(QueueEventPublisher::new(events));
        let related_aggregates = RelatedAggregatesValidator::new(
            categories.clone(),
            genres.clone(),
            cast_members.clone(),
        );

        let update_media_status = Arc::new(UpdateMediaStatusHandler::new(video_gateway.clone()));
        let encoder_listener = Arc::new(VideoEncoderListener::new(update_media_status.clone()));

        Self {
            create_video: Arc::new(CreateVideoHandler::new(
                video_gateway.clone(),
                media_gateway.clone(),
                related_aggregates.clone(),
                event_publisher.clone(),
            )),
            update_video: Arc::new(UpdateVideoHandler::new(
                video_gateway.clone(),
                media_gateway.clone(),
                related_aggregates,
                event_publisher.clone(),
            )),
            upload_media: Arc::new(UploadMediaHandler::new(
                video_gateway.clone(),
                media_gateway.clone(),
                event_publisher,
            )),
            get_video: Arc::new(GetVideoHandler::new(video_gateway.clone())),
            list_videos: Arc::new(ListVideosHandler::new(video_gateway.clone())),
            get_media: Arc::new(GetMediaHandler::new(media_gateway.clone())),
            delete_video: Arc::new(DeleteVideoHandler::new(video_gateway, media_gateway)),
            update_media_status,
            encoder_listener,
            categories,
            genres,
            cast_members,
            videos,
            media_resources,
        }
    }
}

/// Run the service: encoder results are read line by line from stdin and
/// reconciled until stdin closes or Ctrl-C is received.
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    init_logger(config.log_level);

    let (event_sender, mut event_receiver) = mpsc::channel::<String>(config.encoder_queue_capacity);
    let services = CatalogServices::build(&config, event_sender);

    // No encoder is attached in-process, outbound events are only logged
    let outbound = tokio::spawn(async move {
        while let Some(payload) = event_receiver.recv().await {
            log_info!("[message:video.encoder.outbound] [payload:{}]", payload);
        }
    });

    let (encoder_sender, encoder_receiver) = mpsc::channel::<String>(config.encoder_queue_capacity);
    let reader = tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) if line.trim().is_empty() => continue,
                Ok(Some(line)) => {
                    if encoder_sender.send(line).await.is_err() {
                        break;
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    log_error!("Could not read encoder input: {}", e);
                    break;
                }
            }
        }
    });

    let cancel = CancellationToken::new();
    let shutdown = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log_info!("Shutdown requested");
            shutdown.cancel();
        }
    });

    services.encoder_listener.run(encoder_receiver, cancel).await;

    reader.abort();
    // Dropping the services closes the outbound event queue
    drop(services);
    outbound.await?;

    Ok(())
}
