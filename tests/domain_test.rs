use tikscribe::domain::{JobStatus, MediaKind, MediaSource, ResolvedMedia};

#[test]
fn given_provider_status_strings_when_parsed_then_round_trip() {
    for status in [
        JobStatus::Queued,
        JobStatus::Processing,
        JobStatus::Completed,
        JobStatus::Error,
    ] {
        assert_eq!(status.as_str().parse::<JobStatus>().unwrap(), status);
    }
}

#[test]
fn given_unknown_status_string_when_parsed_then_fails() {
    assert!("canceled".parse::<JobStatus>().is_err());
}

#[test]
fn given_statuses_when_checked_then_only_completed_and_error_are_terminal() {
    assert!(!JobStatus::Queued.is_terminal());
    assert!(!JobStatus::Processing.is_terminal());
    assert!(JobStatus::Completed.is_terminal());
    assert!(JobStatus::Error.is_terminal());
}

#[test]
fn given_video_with_sources_when_selecting_then_first_candidate_wins() {
    let media = ResolvedMedia::video(vec![
        MediaSource {
            url: "https://cdn.example.com/hd.mp4".to_string(),
            quality: Some("hd".to_string()),
        },
        MediaSource {
            url: "https://cdn.example.com/sd.mp4".to_string(),
            quality: Some("standard".to_string()),
        },
    ]);

    assert_eq!(
        media.first_video_source().unwrap().url,
        "https://cdn.example.com/hd.mp4"
    );
}

#[test]
fn given_video_without_sources_when_selecting_then_none() {
    let media = ResolvedMedia::video(vec![]);

    assert!(media.first_video_source().is_none());
}

#[test]
fn given_image_post_when_selecting_then_none_even_with_sources() {
    let media = ResolvedMedia {
        kind: MediaKind::Image,
        sources: vec![MediaSource {
            url: "https://cdn.example.com/1.jpg".to_string(),
            quality: None,
        }],
    };

    assert!(media.first_video_source().is_none());
}
