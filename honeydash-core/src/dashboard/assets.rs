use rust_embed::RustEmbed;
use std::borrow::Cow;

#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct DashboardAssets;

pub struct StaticAsset {
    pub content_type: String,
    pub body: Cow<'static, [u8]>,
}

/// Fetch an embedded dashboard asset by file name.
pub fn load_asset(name: &str) -> Option<StaticAsset> {
    let file = DashboardAssets::get(name)?;
    let mime = mime_guess::from_path(name).first_or_octet_stream();

    let content_type = if mime.type_() == mime_guess::mime::TEXT {
        format!("{}; charset=utf-8", mime.essence_str())
    } else {
        mime.essence_str().to_string()
    };

    Some(StaticAsset {
        content_type,
        body: file.data,
    })
}
