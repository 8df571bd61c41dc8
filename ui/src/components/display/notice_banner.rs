use dioxus::prelude::*;

use crate::features::notice::Notice;

#[derive(Props, PartialEq, Clone)]
pub struct NoticeBannerProps {
    #[props(!optional)]
    pub notice: Option<Notice>,
}

#[component]
pub fn NoticeBanner(props: NoticeBannerProps) -> Element {
    let Some(notice) = props.notice else {
        return rsx! {};
    };

    rsx! {
        div {
            class: notice.kind.css_class(),
            role: "alert",
            "{notice.message}"
        }
    }
}
