// crates/travelmap-core/src/fragment.rs

//! HTML fragment for the photo detail panel. The front end injects it
//! directly into the DOM, so it is a snippet, not a document.

use crate::model::Location;

/// Renders the detail panel of one location: header with a close button,
/// the description annotated with its day, then one block per photo in
/// stored order.
pub fn render_location_photos(location: &Location) -> String {
    let mut html = String::with_capacity(256 + location.photos.len() * 192);

    html.push_str(&format!(
        r#"<div class="detail-header">
    <div class="detail-title">{name}</div>
    <button class="close-btn" onclick="closePhotoDetail()">×</button>
</div>
<div class="location-description">{description} (第 {day} 天)</div>"#,
        name = escape_html(&location.name),
        description = escape_html(&location.description),
        day = location.day,
    ));

    for photo in &location.photos {
        let caption = escape_html(&photo.caption);
        html.push_str(&format!(
            r#"
<div class="photo-item">
    <img src="{src}" alt="{caption}">
    <div class="photo-caption">{caption}</div>
</div>"#,
            src = escape_html(photo.display_url()),
        ));
    }

    html
}

/// Escapes text for use in element content and double- or single-quoted
/// attribute values.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Photo;
    use crate::TravelData;

    #[test]
    fn renders_default_location() {
        let data = TravelData::defaults();
        let html = render_location_photos(data.find_location(3).unwrap());

        assert!(html.contains(r#"<div class="detail-title">西門町</div>"#));
        assert!(html.contains("台北熱鬧的購物商圈 (第 2 天)"));
        assert!(html.contains("closePhotoDetail()"));
        assert_eq!(html.matches(r#"class="photo-caption""#).count(), 1);
        assert!(html.contains(r#"<div class="photo-caption">西門町街景</div>"#));
        // Query-string ampersands are escaped inside the attribute.
        assert!(html.contains("?w=800&amp;h=600&amp;fit=crop"));
    }

    #[test]
    fn photos_keep_stored_order() {
        let data = TravelData::defaults();
        let html = render_location_photos(data.find_location(1).unwrap());
        let outside = html.find("台北101外觀").unwrap();
        let night = html.find("台北101夜景").unwrap();
        assert!(outside < night);
    }

    #[test]
    fn empty_full_url_falls_back_to_thumbnail() {
        let mut loc = TravelData::defaults().locations[1].clone();
        loc.photos = vec![Photo {
            thumbnail: "thumb.jpg".into(),
            full: String::new(),
            caption: "only thumb".into(),
        }];
        let html = render_location_photos(&loc);
        assert!(html.contains(r#"<img src="thumb.jpg" alt="only thumb">"#));
    }

    #[test]
    fn markup_in_data_is_escaped() {
        let mut loc = TravelData::defaults().locations[0].clone();
        loc.name = "<script>alert('x')</script>".into();
        let html = render_location_photos(&loc);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
    }

    #[test]
    fn location_without_photos_renders_header_only() {
        let mut loc = TravelData::defaults().locations[0].clone();
        loc.photos.clear();
        let html = render_location_photos(&loc);
        assert!(html.contains("detail-header"));
        assert!(!html.contains("photo-item"));
    }
}
