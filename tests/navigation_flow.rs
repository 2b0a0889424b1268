//! Navigation Flow Integration Tests
//!
//! End-to-end tests driving the router the way the app does: launch,
//! navigate between screens, open images in the editor, and export them.

use app_core::{Color, InMemoryLibrary, Size};
use app_platform::{AdEvent, RecordingAdPresenter, ScenePhase};
use app_state::AppConfig;
use app_ui::{AppServices, HomePanel, NavigationFlags, NavigationRouter, Screen, ScreenBody};
use base64::Engine;
use image::{DynamicImage, Rgba, RgbaImage};
use media_processing::{transform, DirectoryAssets, ImageBlob, ImageFormat, MemoryAssets};
use std::io::Cursor;
use std::sync::Arc;
use tempfile::TempDir;

fn png_bytes(width: u32, height: u32, pixel: [u8; 4]) -> Vec<u8> {
    let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba(pixel)));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    bytes
}

fn library() -> InMemoryLibrary {
    InMemoryLibrary::new()
        .with_messages("Romance", ["You are my sunshine", "Forever yours"])
        .with_images("Romance", ["heart_01", "heart_02"])
}

/// Launch renders home and starts ads exactly once
#[test]
fn test_launch_flow() {
    let recorder = Arc::new(RecordingAdPresenter::new());
    let services = AppServices::in_memory(library(), MemoryAssets::new()).with_ads(recorder.clone());
    let mut router = NavigationRouter::new(services, &AppConfig::default());

    let rendered = router.render();
    assert_eq!(rendered.screen, Screen::Home);
    assert!(matches!(rendered.body, ScreenBody::Home { panel: HomePanel::Quotes }));

    // Background and back to active requests a second ad
    assert!(router.on_scene_phase(ScenePhase::Active));
    assert!(!router.on_scene_phase(ScenePhase::Inactive));
    assert!(!router.on_scene_phase(ScenePhase::Background));
    assert!(router.on_scene_phase(ScenePhase::Active));

    assert_eq!(
        recorder.events(),
        vec![AdEvent::Started, AdEvent::AppOpenRequested, AdEvent::AppOpenRequested]
    );
}

/// Browsing messages and going back retraces the parent chain
#[test]
fn test_messages_round_trip() {
    let services = AppServices::in_memory(library(), MemoryAssets::new());
    let mut router = NavigationRouter::new(services, &AppConfig::default());

    router.select_category("Romance");
    router.navigate(Screen::MessagesHome);
    router.navigate(Screen::Messages);
    router.navigate(Screen::MessagesSlide);

    let rendered = router.render();
    assert_eq!(rendered.screen, Screen::MessagesSlide);
    assert_eq!(rendered.selection.category_name, "Romance");

    let messages = router.services().messages.messages(&rendered.selection.category_name);
    assert_eq!(messages.len(), 2);

    assert!(router.go_back());
    assert_eq!(router.current_screen(), Screen::Messages);
    assert!(router.go_back());
    assert_eq!(router.current_screen(), Screen::MessagesHome);
    assert!(router.go_back());
    assert_eq!(router.current_screen(), Screen::Home);
    assert!(!router.go_back());
}

/// Legacy flags with several screens set resolve by priority
#[test]
fn test_legacy_flags_resolve() {
    let services = AppServices::in_memory(library(), MemoryAssets::new());
    let mut router = NavigationRouter::new(services, &AppConfig::default());

    let flags = NavigationFlags {
        setting: true,
        image: true,
        messages_slide: true,
        ..NavigationFlags::default()
    };
    router.apply_flags(flags);
    assert_eq!(router.render().screen, Screen::Settings);

    router.apply_flags(NavigationFlags::default());
    assert_eq!(router.render().screen, Screen::Home);
}

/// Inline base64 opens in the editor
#[test]
fn test_edit_inline_image() {
    let services = AppServices::in_memory(library(), MemoryAssets::new());
    let mut router = NavigationRouter::new(services, &AppConfig::default());

    let payload = base64::engine::general_purpose::STANDARD.encode(png_bytes(8, 3, [255, 0, 0, 255]));
    router.edit_image(payload);

    let rendered = router.render();
    let image = rendered.edit_image().unwrap();
    assert_eq!((image.width(), image.height()), (8, 3));
    assert_eq!(image.source_format(), ImageFormat::Png);
}

/// Asset names load from the bundled directory
#[test]
fn test_edit_directory_asset() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("heart_01.png"), png_bytes(5, 5, [0, 0, 255, 255])).unwrap();

    let config = AppConfig::default().with_asset_directory(temp_dir.path());
    let services = AppServices::in_memory(library(), MemoryAssets::new())
        .with_assets(Arc::new(DirectoryAssets::new(config.asset_directory.clone())));
    let mut router = NavigationRouter::new(services, &config);

    router.edit_image("heart_01");
    assert!(router.render().edit_image().is_some());

    router.edit_image("heart_99");
    let rendered = router.render();
    assert_eq!(rendered.screen, Screen::EditImage);
    assert!(rendered.is_placeholder());
}

/// Edit, rotate, crop and export an image
#[test]
fn test_edit_and_export() {
    let assets = MemoryAssets::new().with_asset("heart_01", png_bytes(40, 20, [10, 20, 30, 255]));
    let services = AppServices::in_memory(library(), assets);
    let mut router = NavigationRouter::new(services, &AppConfig::default());

    router.edit_image("heart_01");
    let rendered = router.render();
    let image = rendered.edit_image().unwrap();

    let rotated = transform::rotate(image, std::f64::consts::FRAC_PI_2).unwrap();
    assert_eq!((rotated.width(), rotated.height()), (20, 40));

    let cropped = transform::center_cropped(&rotated, Size::new(10.0, 10.0)).unwrap();
    assert_eq!((cropped.width(), cropped.height()), (10, 10));

    let exported = router.codec().encode_lossless(&cropped).unwrap();
    let restored = router.codec().decode(&exported).unwrap();
    assert_eq!((restored.width(), restored.height()), (10, 10));

    let jpeg = router.codec().encode_lossy(&cropped, 0.85).unwrap();
    assert_eq!(router.codec().decode(&jpeg).unwrap().source_format(), ImageFormat::Jpeg);
}

/// Resolution off the calling task
#[tokio::test]
async fn test_resolve_async() {
    let assets = Arc::new(MemoryAssets::new().with_asset("heart_02", png_bytes(3, 3, [1, 1, 1, 255])));
    let services = AppServices::in_memory(library(), MemoryAssets::new()).with_assets(assets.clone());
    let router = NavigationRouter::new(services, &AppConfig::default());

    let blob = router
        .codec()
        .resolve_async("heart_02".to_string(), router.services().assets.clone())
        .await;
    assert_eq!(blob.map(|b| b.width()), Some(3));
}

/// A solid background can be exported as an image
#[test]
fn test_solid_background_export() {
    let codec = media_processing::ImageCodec::new();
    let blob: ImageBlob =
        transform::solid_image(Color::from_hex("#B3134C"), Size::new(4.0, 2.0)).unwrap();
    let encoded = codec.encode_lossless(&blob).unwrap();
    let decoded = codec.decode(&encoded).unwrap();

    let pixel = decoded.as_dynamic().to_rgba8().get_pixel(0, 0).0;
    assert_eq!(pixel, [0xB3, 0x13, 0x4C, 0xFF]);
}
