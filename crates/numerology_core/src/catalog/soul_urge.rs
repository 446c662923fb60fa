//! Soul urge readings for 1-9 and the master numbers.

use super::SoulUrgeEntry;

pub(super) const SOUL_URGE: &[(u32, SoulUrgeEntry)] = &[
    (
        1,
        SoulUrgeEntry {
            meaning: "Khao khát độc lập và tự do thể hiện bản thân.",
            desires: &["Tự chủ", "Lãnh đạo", "Công nhận cá nhân"],
            motivation: "Khát vọng trở thành số một và được công nhận.",
        },
    ),
    (
        2,
        SoulUrgeEntry {
            meaning: "Khao khát hòa bình và quan hệ hài hòa.",
            desires: &["Hòa bình", "Hợp tác", "Yêu thương"],
            motivation: "Mong muốn kết nối và hòa giải.",
        },
    ),
    (
        3,
        SoulUrgeEntry {
            meaning: "Khao khát sáng tạo và tự thể hiện.",
            desires: &["Sáng tạo", "Vui vẻ", "Được chú ý"],
            motivation: "Đam mê nghệ thuật và giao tiếp.",
        },
    ),
    (
        4,
        SoulUrgeEntry {
            meaning: "Khao khát ổn định và trật tự.",
            desires: &["An toàn", "Trật tự", "Xây dựng"],
            motivation: "Mong muốn tạo nền tảng vững chắc.",
        },
    ),
    (
        5,
        SoulUrgeEntry {
            meaning: "Khao khát tự do và trải nghiệm.",
            desires: &["Tự do", "Phiêu lưu", "Đa dạng"],
            motivation: "Khát khao khám phá và thay đổi.",
        },
    ),
    (
        6,
        SoulUrgeEntry {
            meaning: "Khao khát yêu thương và hài hòa gia đình.",
            desires: &["Yêu thương", "Gia đình", "Chăm sóc"],
            motivation: "Mong muốn nuôi dưỡng và bảo vệ.",
        },
    ),
    (
        7,
        SoulUrgeEntry {
            meaning: "Khao khát hiểu biết và tâm linh.",
            desires: &["Trí tuệ", "Tâm linh", "Chân lý"],
            motivation: "Tìm kiếm ý nghĩa sâu xa của cuộc sống.",
        },
    ),
    (
        8,
        SoulUrgeEntry {
            meaning: "Khao khát thành công và quyền lực.",
            desires: &["Thành công", "Quyền lực", "Sự công nhận"],
            motivation: "Tham vọng đạt đỉnh cao.",
        },
    ),
    (
        9,
        SoulUrgeEntry {
            meaning: "Khao khát phục vụ nhân loại.",
            desires: &["Nhân đạo", "Giúp đỡ", "Yêu thương toàn cầu"],
            motivation: "Mong muốn làm cho thế giới tốt đẹp hơn.",
        },
    ),
    (
        11,
        SoulUrgeEntry {
            meaning: "Khao khát kết nối tâm linh sâu sắc.",
            desires: &["Giác ngộ", "Truyền cảm hứng", "Tầm nhìn"],
            motivation: "Sứ mệnh tâm linh cao.",
        },
    ),
    (
        22,
        SoulUrgeEntry {
            meaning: "Khao khát tạo di sản vĩ đại.",
            desires: &["Xây dựng lớn", "Di sản", "Ảnh hưởng toàn cầu"],
            motivation: "Khát vọng thay đổi thế giới.",
        },
    ),
    (
        33,
        SoulUrgeEntry {
            meaning: "Khao khát yêu thương và chữa lành toàn cầu.",
            desires: &["Yêu thương vô điều kiện", "Chữa lành", "Phục vụ"],
            motivation: "Sứ mệnh yêu thương cao nhất.",
        },
    ),
];
