/// Test data factories using builder pattern
///
/// Provides convenient methods to create commands and resources with
/// sensible defaults
use catalog_admin_lib::modules::video::{
    application::{CreateVideoCommand, UpdateVideoCommand, VideoFields, VideoResources},
    domain::Resource,
};

pub struct ResourceFactory;

impl ResourceFactory {
    pub fn video() -> Resource {
        Resource::with(b"raw video bytes".to_vec(), "abc", "video/mp4", "video.mp4")
    }

    pub fn trailer() -> Resource {
        Resource::of(b"raw trailer bytes".to_vec(), "video/mp4", "trailer.mp4")
    }

    pub fn image(name: &str) -> Resource {
        Resource::of(name.as_bytes().to_vec(), "image/png", name)
    }

    pub fn all() -> VideoResources {
        VideoResources {
            video: Some(Self::video()),
            trailer: Some(Self::trailer()),
            banner: Some(Self::image("banner.png")),
            thumbnail: Some(Self::image("thumbnail.png")),
            thumbnail_half: Some(Self::image("thumbnail_half.png")),
        }
    }
}

pub struct VideoFactory {
    fields: VideoFields,
    resources: VideoResources,
}

impl Default for VideoFactory {
    fn default() -> Self {
        Self {
            fields: VideoFields {
                title: "S".to_string(),
                description: "A short documentary about encoders".to_string(),
                launched_at: Some(2023),
                duration: 120.5,
                opened: true,
                published: false,
                rating: Some("L".to_string()),
                categories: Vec::new(),
                genres: Vec::new(),
                cast_members: Vec::new(),
            },
            resources: VideoResources::default(),
        }
    }
}

impl VideoFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.fields.title = title.to_string();
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.fields.description = description.to_string();
        self
    }

    pub fn with_rating(mut self, rating: Option<&str>) -> Self {
        self.fields.rating = rating.map(str::to_string);
        self
    }

    pub fn with_categories(mut self, ids: &[&str]) -> Self {
        self.fields.categories = ids.iter().map(|id| id.to_string()).collect();
        self
    }

    pub fn with_genres(mut self, ids: &[&str]) -> Self {
        self.fields.genres = ids.iter().map(|id| id.to_string()).collect();
        self
    }

    pub fn with_cast_members(mut self, ids: &[&str]) -> Self {
        self.fields.cast_members = ids.iter().map(|id| id.to_string()).collect();
        self
    }

    pub fn with_video(mut self, resource: Resource) -> Self {
        self.resources.video = Some(resource);
        self
    }

    pub fn with_trailer(mut self, resource: Resource) -> Self {
        self.resources.trailer = Some(resource);
        self
    }

    pub fn with_banner(mut self, resource: Resource) -> Self {
        self.resources.banner = Some(resource);
        self
    }

    pub fn with_resources(mut self, resources: VideoResources) -> Self {
        self.resources = resources;
        self
    }

    pub fn create_command(self) -> CreateVideoCommand {
        CreateVideoCommand::new(self.fields, self.resources)
    }

    pub fn update_command(self, id: &str) -> UpdateVideoCommand {
        UpdateVideoCommand::new(id, self.fields, self.resources)
    }
}
