use super::Fragment;

pub const POST_FRAGMENT: Fragment = Fragment {
    name: "PostInfo",
    fields: &[
        "id",
        "title",
        "slug",
        "html",
        "excerpt",
        "published_at",
        "updated_at",
        "feature_image",
    ],
};

pub const EPISODE_FRAGMENT: Fragment = Fragment {
    name: "EpisodeInfo",
    fields: &[
        "id",
        "title",
        "description",
        "long_description",
        "published_at",
        "token",
        "legacy_id",
    ],
};

pub const BOOKMARK_FRAGMENT: Fragment = Fragment {
    name: "BookmarkInfo",
    fields: &[
        "id",
        "title",
        "url",
        "host",
        "description",
        "image",
        "created_at",
    ],
};
