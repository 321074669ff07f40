use portfolio_api::gallery::{render::render_gallery, GalleryView, ProjectGallery};
use portfolio_api::settings::GalleryConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = GalleryConfig::new()?;
    let gallery = ProjectGallery::new(&config);

    print!("{}", render_gallery(&GalleryView::loading()));

    let view = gallery.load().await;
    print!("{}", render_gallery(&view));

    Ok(())
}
