//! マニフェスト（images.json）の取得
//!
//! 起動時に1回だけ呼ぶ。失敗しても再試行しない。

use media_gallery_common::{load_manifest, Error, Item, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

/// マニフェストを取得し、追加日の新しい順に並べて返す
pub async fn fetch_manifest(url: &str) -> Result<Vec<Item>> {
    let body = fetch_text(url).await?;
    load_manifest(&body)
}

async fn fetch_text(url: &str) -> Result<String> {
    let opts = RequestInit::new();
    opts.set_method("GET");

    let request = Request::new_with_str_and_init(url, &opts).map_err(fetch_error)?;

    let window = web_sys::window().ok_or_else(|| Error::Fetch("window がありません".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(fetch_error)?;
    let resp: Response = resp_value.dyn_into().map_err(fetch_error)?;

    if !resp.ok() {
        return Err(Error::HttpStatus(resp.status()));
    }

    let text = JsFuture::from(resp.text().map_err(fetch_error)?)
        .await
        .map_err(fetch_error)?;
    text.as_string()
        .ok_or_else(|| Error::Fetch("レスポンスが文字列ではありません".into()))
}

fn fetch_error(value: JsValue) -> Error {
    Error::Fetch(format!("{:?}", value))
}
