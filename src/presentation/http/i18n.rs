// src/presentation/http/i18n.rs
//! Message catalog for error responses.

use crate::application::validation::{FieldError, FieldErrorCode};
use std::{borrow::Cow, str::FromStr};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Vi,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Vi => "vi",
        }
    }

    /// Picks the supported language with the highest quality value from an
    /// `Accept-Language` header. Earlier entries win ties.
    pub fn from_accept_language(header: &str) -> Option<Self> {
        let mut best: Option<(Self, f32)> = None;
        for entry in header.split(',') {
            let mut parts = entry.trim().split(';');
            let tag = parts.next().unwrap_or_default().trim();
            let quality = parts
                .find_map(|param| param.trim().strip_prefix("q="))
                .and_then(|q| q.trim().parse::<f32>().ok())
                .unwrap_or(1.0);
            let primary = tag.split('-').next().unwrap_or_default();
            let Ok(locale) = primary.parse::<Self>() else {
                continue;
            };
            if quality > 0.0 && best.is_none_or(|(_, q)| quality > q) {
                best = Some((locale, quality));
            }
        }
        best.map(|(locale, _)| locale)
    }

    /// Localized text for a message key. Unknown keys come back unchanged.
    pub fn message<'a>(&self, key: &'a str) -> Cow<'a, str> {
        let text = match self {
            Self::En => english(key),
            Self::Vi => vietnamese(key),
        };
        text.map_or(Cow::Borrowed(key), Cow::Borrowed)
    }

    pub fn field_message(&self, error: &FieldError) -> String {
        let template = match (self, error.code) {
            (Self::En, FieldErrorCode::Required) => "{field} is required",
            (Self::En, FieldErrorCode::TooLong) => "{field} must be at most {limit} characters",
            (Self::En, FieldErrorCode::TooShort) => "{field} must be at least {limit} characters",
            (Self::En, FieldErrorCode::InvalidEmail) => "{field} must be a valid email address",
            (Self::En, FieldErrorCode::InvalidValue) => "{field} is invalid",
            (Self::Vi, FieldErrorCode::Required) => "{field} là bắt buộc",
            (Self::Vi, FieldErrorCode::TooLong) => "{field} không được vượt quá {limit} ký tự",
            (Self::Vi, FieldErrorCode::TooShort) => "{field} phải có ít nhất {limit} ký tự",
            (Self::Vi, FieldErrorCode::InvalidEmail) => "{field} phải là địa chỉ email hợp lệ",
            (Self::Vi, FieldErrorCode::InvalidValue) => "{field} không hợp lệ",
        };
        let limit = error.limit.map(|l| l.to_string()).unwrap_or_default();
        template
            .replace("{field}", error.field)
            .replace("{limit}", &limit)
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "vi" => Ok(Self::Vi),
            other => Err(format!("unsupported locale '{other}'")),
        }
    }
}

fn english(key: &str) -> Option<&'static str> {
    Some(match key {
        "common.internal_error" => "Internal server error",
        "common.validation_failed" => "Validation failed",
        "common.invalid_json" => "Request body is not valid JSON",
        "common.duplicate_entry" => "Entry already exists",
        "common.reference_missing" => "Referenced record does not exist",
        "common.constraint_violated" => "Data violates a store constraint",
        "pagination.page_invalid" => "Page must be 1 or greater",
        "pagination.limit_invalid" => "Limit must be between 1 and 100",
        "auth.missing_token" => "Authentication token is missing",
        "auth.invalid_token" => "Authentication token is invalid or expired",
        "auth.invalid_credentials" => "Invalid email or password",
        "auth.user_not_found" => "User for this token no longer exists",
        "user.not_found" => "User not found",
        "user.email_taken" => "Email is already taken",
        "user.email_required" => "Email is required",
        "user.email_invalid" => "Email is invalid",
        "user.username_required" => "Username is required",
        "user.username_too_long" => "Username is too long",
        "user.password_too_short" => "Password is too short",
        "article.not_found" => "Article not found",
        "article.slug_taken" => "An article with this slug already exists",
        "article.title_required" => "Title is required",
        "article.title_too_long" => "Title is too long",
        "article.description_required" => "Description is required",
        "article.body_required" => "Body is required",
        "article.body_too_long" => "Body is too long",
        "article.forbidden_update" => "You can only update your own articles",
        "article.forbidden_delete" => "You can only delete your own articles",
        "article.already_favorited" => "Article is already favorited",
        "article.not_favorited" => "Article is not favorited",
        "comment.not_found" => "Comment not found",
        "comment.body_required" => "Comment body is required",
        "comment.forbidden_delete" => "You can only delete your own comments",
        "profile.not_found" => "Profile not found",
        "follow.cannot_follow_self" => "You cannot follow yourself",
        "follow.already_following" => "You are already following this user",
        "follow.not_following" => "You are not following this user",
        "upload.too_large" => "Image must be 5 MB or smaller",
        "upload.unsupported_type" => "Only JPEG, PNG, GIF and WebP images are accepted",
        "upload.invalid_multipart" => "Malformed multipart form",
        _ => return None,
    })
}

fn vietnamese(key: &str) -> Option<&'static str> {
    Some(match key {
        "common.internal_error" => "Lỗi máy chủ nội bộ",
        "common.validation_failed" => "Dữ liệu không hợp lệ",
        "common.invalid_json" => "Nội dung yêu cầu không phải JSON hợp lệ",
        "common.duplicate_entry" => "Dữ liệu đã tồn tại",
        "common.reference_missing" => "Bản ghi được tham chiếu không tồn tại",
        "common.constraint_violated" => "Dữ liệu vi phạm ràng buộc",
        "pagination.page_invalid" => "Trang phải lớn hơn hoặc bằng 1",
        "pagination.limit_invalid" => "Giới hạn phải nằm trong khoảng 1 đến 100",
        "auth.missing_token" => "Thiếu mã xác thực",
        "auth.invalid_token" => "Mã xác thực không hợp lệ hoặc đã hết hạn",
        "auth.invalid_credentials" => "Email hoặc mật khẩu không đúng",
        "auth.user_not_found" => "Người dùng của mã này không còn tồn tại",
        "user.not_found" => "Không tìm thấy người dùng",
        "user.email_taken" => "Email đã được sử dụng",
        "user.email_required" => "Email là bắt buộc",
        "user.email_invalid" => "Email không hợp lệ",
        "user.username_required" => "Tên người dùng là bắt buộc",
        "user.username_too_long" => "Tên người dùng quá dài",
        "user.password_too_short" => "Mật khẩu quá ngắn",
        "article.not_found" => "Không tìm thấy bài viết",
        "article.slug_taken" => "Đã có bài viết với slug này",
        "article.title_required" => "Tiêu đề là bắt buộc",
        "article.title_too_long" => "Tiêu đề quá dài",
        "article.description_required" => "Mô tả là bắt buộc",
        "article.body_required" => "Nội dung là bắt buộc",
        "article.body_too_long" => "Nội dung quá dài",
        "article.forbidden_update" => "Bạn chỉ có thể cập nhật bài viết của mình",
        "article.forbidden_delete" => "Bạn chỉ có thể xóa bài viết của mình",
        "article.already_favorited" => "Bài viết đã được yêu thích",
        "article.not_favorited" => "Bài viết chưa được yêu thích",
        "comment.not_found" => "Không tìm thấy bình luận",
        "comment.body_required" => "Nội dung bình luận là bắt buộc",
        "comment.forbidden_delete" => "Bạn chỉ có thể xóa bình luận của mình",
        "profile.not_found" => "Không tìm thấy hồ sơ",
        "follow.cannot_follow_self" => "Bạn không thể tự theo dõi chính mình",
        "follow.already_following" => "Bạn đã theo dõi người dùng này",
        "follow.not_following" => "Bạn chưa theo dõi người dùng này",
        "upload.too_large" => "Ảnh phải nhỏ hơn hoặc bằng 5 MB",
        "upload.unsupported_type" => "Chỉ chấp nhận ảnh JPEG, PNG, GIF và WebP",
        "upload.invalid_multipart" => "Biểu mẫu multipart không hợp lệ",
        _ => return None,
    })
}
