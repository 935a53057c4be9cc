//! 请求体校验链。
//!
//! 每条规则是对请求字段的纯谓词；调度器按声明顺序执行，遇到第一个
//! 失败立即停止，失败消息直接进入响应包装。

/// 校验失败，携带面向用户的文案。
#[derive(Debug, PartialEq, Eq)]
pub struct ValidationError(pub &'static str);

impl ValidationError {
    pub fn message(&self) -> &'static str {
        self.0
    }
}

pub type Check = Result<(), ValidationError>;

/// 依序执行校验链，返回第一个失败。
pub fn run(checks: impl IntoIterator<Item = Check>) -> Check {
    for check in checks {
        check?;
    }
    Ok(())
}

pub fn valid_username(username: &str) -> Check {
    let len = username.chars().count();
    if !(4..=20).contains(&len) {
        return Err(ValidationError(
            "Username length is wrong. Length should be between 4-20 symbols.",
        ));
    }
    Ok(())
}

/// 子规则按固定顺序：长度、两次输入一致、含数字、含特殊字符。
pub fn valid_password(password1: &str, password2: &str) -> Check {
    let len = password1.chars().count();
    if !(4..=20).contains(&len) {
        return Err(ValidationError(
            "Password length is wrong. Length should be between 4-20 symbols.",
        ));
    }
    if password1 != password2 {
        return Err(ValidationError("Passwords does not match."));
    }
    if !password1.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError(
            "Password should contain at least one number.",
        ));
    }
    if password1.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError(
            "Password should contain at least one special character.",
        ));
    }
    Ok(())
}

pub fn valid_image_url(image: &str) -> Check {
    if image.is_empty() {
        return Err(ValidationError("Please enter image url."));
    }
    https_image_url(image)
}

/// 回帖的配图可留空；一旦填写仍要求 https。
pub fn valid_optional_image_url(image: &str) -> Check {
    if image.is_empty() {
        return Ok(());
    }
    https_image_url(image)
}

fn https_image_url(image: &str) -> Check {
    if !image.starts_with("https://") {
        return Err(ValidationError(
            "Image should have \"https://\" in its link.",
        ));
    }
    Ok(())
}

/// 回帖的视频可留空；一旦填写必须是 YouTube 链接形态。
pub fn valid_optional_video_url(video: &str) -> Check {
    if video.is_empty() {
        return Ok(());
    }
    if !is_youtube_url(video) {
        return Err(ValidationError("Invalid YouTube video URL."));
    }
    Ok(())
}

/// 可选的 http(s):// 前缀、可选的 www.，主机是 youtube/youtu.be 一族，
/// 后面必须跟非空路径。
fn is_youtube_url(url: &str) -> bool {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    let rest = rest.strip_prefix("www.").unwrap_or(rest);

    let Some(slash) = rest.find('/') else {
        return false;
    };
    let (host, path) = rest.split_at(slash);
    let host_ok = matches!(host, "youtube.com" | "youtu.be" | "youtube" | "youtu");
    host_ok && path.len() > 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_length_bounds() {
        assert!(valid_username("abc").is_err());
        assert!(valid_username("abcd").is_ok());
        assert!(valid_username(&"x".repeat(20)).is_ok());
        assert!(valid_username(&"x".repeat(21)).is_err());
    }

    #[test]
    fn password_rules_fire_in_order() {
        // 长度优先
        assert_eq!(
            valid_password("ab", "ab").unwrap_err().message(),
            "Password length is wrong. Length should be between 4-20 symbols."
        );
        // 两次输入必须一致
        assert_eq!(
            valid_password("abc1!", "abc2!").unwrap_err().message(),
            "Passwords does not match."
        );
        // 有特殊字符但没有数字
        assert_eq!(
            valid_password("abc!d", "abc!d").unwrap_err().message(),
            "Password should contain at least one number."
        );
        // 有数字但没有特殊字符
        assert_eq!(
            valid_password("abc1", "abc1").unwrap_err().message(),
            "Password should contain at least one special character."
        );
        // 长度、数字、特殊字符都满足
        assert!(valid_password("ab1!", "ab1!").is_ok());
    }

    #[test]
    fn required_image_url() {
        assert_eq!(
            valid_image_url("").unwrap_err().message(),
            "Please enter image url."
        );
        assert!(valid_image_url("http://example.com/a.png").is_err());
        assert!(valid_image_url("https://example.com/a.png").is_ok());
    }

    #[test]
    fn optional_image_url_allows_empty() {
        assert!(valid_optional_image_url("").is_ok());
        assert!(valid_optional_image_url("ftp://x").is_err());
        assert!(valid_optional_image_url("https://example.com/a.png").is_ok());
    }

    #[test]
    fn youtube_url_shapes() {
        assert!(valid_optional_video_url("").is_ok());
        assert!(valid_optional_video_url("https://www.youtube.com/watch?v=abc").is_ok());
        assert!(valid_optional_video_url("http://youtube.com/watch?v=abc").is_ok());
        assert!(valid_optional_video_url("youtu.be/abc").is_ok());
        assert!(valid_optional_video_url("www.youtu.be/abc").is_ok());
        // 没有路径
        assert!(valid_optional_video_url("https://youtube.com").is_err());
        assert!(valid_optional_video_url("https://youtube.com/").is_err());
        // 其他站点
        assert!(valid_optional_video_url("https://vimeo.com/123").is_err());
    }

    #[test]
    fn chain_stops_at_first_failure() {
        let result = run([
            valid_username("abc"),
            valid_password("ab1!", "ab1!"),
        ]);
        assert_eq!(
            result.unwrap_err().message(),
            "Username length is wrong. Length should be between 4-20 symbols."
        );
        assert!(run([valid_username("abcd"), valid_password("ab1!", "ab1!")]).is_ok());
    }
}
