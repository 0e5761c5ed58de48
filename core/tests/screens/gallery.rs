// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use evento_api::{Category, Media, MediaId, MediaKind, PackageId};
use evento_core::{Error, MediaSource, Session};

use crate::common::{FakeState, package, sign_in, test_evento, vendor_login};

fn state() -> FakeState {
    FakeState {
        packages: vec![package(10, 1, 5000.0), package(20, 2, 3000.0)],
        media: vec![Media {
            id: MediaId::new(1),
            package_id: Some(PackageId::new(10)),
            kind: MediaKind::Image,
            image_url: "http://cdn/stage.jpg".to_string(),
        }],
        logins: vec![vendor_login(1, "Lens Light")],
        ..Default::default()
    }
}

#[tokio::test]
async fn gallery_loads_from_category() {
    let evento = test_evento(state());
    let mut gallery = evento.media_gallery(
        PackageId::new(10),
        MediaSource::Category(Category::Decorators),
    );

    gallery.load().await.unwrap();

    assert_eq!(gallery.media().len(), 1);
    assert_eq!(evento.marketplace().calls(), ["list_category_media"]);
}

#[tokio::test]
async fn gallery_upload_refetches() {
    let evento = test_evento(state());
    let session = Session::from(sign_in(&evento, 1).await);
    let mut gallery = evento.media_gallery(PackageId::new(10), MediaSource::Manager);

    let msg = gallery
        .upload_bytes(&session, "reel.mp4", vec![0; 16])
        .await
        .unwrap();

    assert_eq!(msg, "Upload successful");
    assert_eq!(gallery.media().len(), 2);
    assert!(gallery.media().iter().any(|a| a.kind == MediaKind::Video));
    assert_eq!(
        evento.marketplace().calls(),
        ["login", "get_package", "upload_media", "list_package_media"]
    );
}

#[tokio::test]
async fn gallery_upload_file_from_disk() {
    let evento = test_evento(state());
    let session = Session::from(sign_in(&evento, 1).await);
    let mut gallery = evento.media_gallery(PackageId::new(10), MediaSource::Manager);

    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("stage.png");
    std::fs::write(&file, b"png").unwrap();

    gallery.upload_file(&session, &file).await.unwrap();

    assert!(
        gallery
            .media()
            .iter()
            .any(|a| a.image_url == "http://cdn/stage.png")
    );
}

#[tokio::test]
async fn gallery_upload_missing_file_fails_before_request() {
    let evento = test_evento(state());
    let session = Session::from(sign_in(&evento, 1).await);
    let mut gallery = evento.media_gallery(PackageId::new(10), MediaSource::Manager);

    let dir = tempfile::tempdir().unwrap();
    let err = gallery
        .upload_file(&session, &dir.path().join("missing.jpg"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Api(_)));
    assert_eq!(evento.marketplace().calls(), ["login"]);
}

#[tokio::test]
async fn gallery_upload_to_other_vendor_is_forbidden() {
    let evento = test_evento(state());
    let session = Session::from(sign_in(&evento, 1).await);
    let mut gallery = evento.media_gallery(PackageId::new(20), MediaSource::Manager);

    let err = gallery
        .upload_bytes(&session, "stage.jpg", vec![1, 2, 3])
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Forbidden(_)));
    assert!(evento.marketplace().with(|s| s.media.len() == 1));
}
