// Unit tests for tag references
// Tests rendering of system tags and labels, and parsing back

use crate::tags::{SystemTag, Tag};

/// **VALUE**: Verifies every system tag renders the literal stream id Inoreader expects.
///
/// **WHY THIS MATTERS**: These strings go verbatim into `it`, `xt`, `a` and `r`
/// parameters. A typo silently filters on a tag that does not exist.
///
/// **BUG THIS CATCHES**: Would catch "liked" instead of "like", or a wrong prefix.
#[test]
fn given_system_tags_when_rendered_then_match_state_stream_ids() {
    assert_eq!(SystemTag::Read.value(), "user/-/state/com.google/read");
    assert_eq!(SystemTag::Starred.value(), "user/-/state/com.google/starred");
    assert_eq!(SystemTag::Liked.value(), "user/-/state/com.google/like");
    assert_eq!(SystemTag::Broadcast.value(), "user/-/state/com.google/broadcast");
    assert_eq!(SystemTag::Annotated.value(), "user/-/state/com.google/annotated");
    assert_eq!(
        SystemTag::SavedWebPages.value(),
        "user/-/state/com.google/saved-web-pages"
    );
}

/// **VALUE**: Verifies both variants of `Tag` render through one operation.
///
/// **WHY THIS MATTERS**: Callers mix system tags and labels in one filter list.
///
/// **BUG THIS CATCHES**: Would catch Display and `value()` drifting apart.
#[test]
fn given_read_and_custom_tags_when_rendered_then_value_and_display_agree() {
    // GIVEN: A system tag and a label
    let read = Tag::from(SystemTag::Read);
    let news = Tag::custom("news");

    // THEN: Both render the expected literal, through value() and Display
    assert_eq!(read.value(), "user/-/state/com.google/read");
    assert_eq!(read.to_string(), read.value());
    assert_eq!(news.value(), "user/-/label/news");
    assert_eq!(news.to_string(), "user/-/label/news");
}

/// **VALUE**: Verifies rendered stream ids parse back into the same tag.
///
/// **BUG THIS CATCHES**: Would catch a label prefix parsed as a system tag or vice versa.
#[test]
fn given_rendered_tags_when_parsed_then_original_tag_returned() {
    for tag in SystemTag::ALL {
        let parsed: Tag = tag.value().parse().unwrap();
        assert_eq!(parsed, Tag::System(tag));
    }

    let parsed: Tag = "user/-/label/Tech News".parse().unwrap();
    assert_eq!(parsed, Tag::custom("Tech News"));
}

/// **VALUE**: Verifies unknown and empty stream ids are rejected.
///
/// **BUG THIS CATCHES**: Would catch `user/-/label/` producing an empty label.
#[test]
fn given_unknown_stream_ids_when_parsed_then_error() {
    assert!("user/-/label/".parse::<Tag>().is_err());
    assert!("user/-/state/com.google/unknown".parse::<Tag>().is_err());
    assert!("feed/http://example.com/rss".parse::<Tag>().is_err());
}
