//! 画像パス生成

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// URIコンポーネントとしてエンコードしない文字（英数字以外）
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// ファイル名をエンコードして画像のパスを作る
pub fn image_src(base: &str, filename: &str) -> String {
    format!("{}{}", base, utf8_percent_encode(filename, URI_COMPONENT))
}
