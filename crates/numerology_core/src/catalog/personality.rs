//! Personality readings for 1-9 and the master numbers.

use super::PersonalityEntry;

pub(super) const PERSONALITY: &[(u32, PersonalityEntry)] = &[
    (
        1,
        PersonalityEntry {
            meaning: "Ấn tượng mạnh mẽ và tự tin.",
            impression: "Người khác thấy bạn là người lãnh đạo tự tin.",
            traits: &["Quyết đoán", "Độc lập", "Năng động"],
        },
    ),
    (
        2,
        PersonalityEntry {
            meaning: "Ấn tượng nhẹ nhàng và dễ gần.",
            impression: "Người khác thấy bạn là người dễ chịu và đáng tin.",
            traits: &["Nhẹ nhàng", "Hợp tác", "Thân thiện"],
        },
    ),
    (
        3,
        PersonalityEntry {
            meaning: "Ấn tượng vui vẻ và sáng tạo.",
            impression: "Người khác thấy bạn là người thú vị và tài năng.",
            traits: &["Vui tươi", "Biểu cảm", "Hấp dẫn"],
        },
    ),
    (
        4,
        PersonalityEntry {
            meaning: "Ấn tượng đáng tin cậy và vững chắc.",
            impression: "Người khác thấy bạn là người đáng tin và nghiêm túc.",
            traits: &["Đáng tin", "Thực tế", "Ổn định"],
        },
    ),
    (
        5,
        PersonalityEntry {
            meaning: "Ấn tượng năng động và hấp dẫn.",
            impression: "Người khác thấy bạn là người thú vị và tự do.",
            traits: &["Năng động", "Linh hoạt", "Hấp dẫn"],
        },
    ),
    (
        6,
        PersonalityEntry {
            meaning: "Ấn tượng ấm áp và quan tâm.",
            impression: "Người khác thấy bạn là người trách nhiệm và chăm sóc.",
            traits: &["Ấm áp", "Chăm sóc", "Đáng tin"],
        },
    ),
    (
        7,
        PersonalityEntry {
            meaning: "Ấn tượng bí ẩn và trí tuệ.",
            impression: "Người khác thấy bạn là người sâu sắc và khó hiểu.",
            traits: &["Bí ẩn", "Trí tuệ", "Độc lập"],
        },
    ),
    (
        8,
        PersonalityEntry {
            meaning: "Ấn tượng quyền lực và thành công.",
            impression: "Người khác thấy bạn là người mạnh mẽ và có quyền uy.",
            traits: &["Quyền uy", "Tự tin", "Chuyên nghiệp"],
        },
    ),
    (
        9,
        PersonalityEntry {
            meaning: "Ấn tượng từ bi và nghệ sĩ.",
            impression: "Người khác thấy bạn là người đầy tình thương và lý tưởng.",
            traits: &["Từ bi", "Lý tưởng", "Nghệ sĩ"],
        },
    ),
    (
        11,
        PersonalityEntry {
            meaning: "Ấn tượng sáng sủa và truyền cảm hứng.",
            impression: "Người khác thấy bạn là người đặc biệt và truyền cảm hứng.",
            traits: &["Truyền cảm hứng", "Trực giác", "Độc đáo"],
        },
    ),
    (
        22,
        PersonalityEntry {
            meaning: "Ấn tượng vĩ đại và có tầm nhìn.",
            impression: "Người khác thấy bạn là người có tầm và khả năng đặc biệt.",
            traits: &["Tầm nhìn", "Mạnh mẽ", "Ấn tượng"],
        },
    ),
    (
        33,
        PersonalityEntry {
            meaning: "Ấn tượng yêu thương và chữa lành.",
            impression: "Người khác thấy bạn là người đầy yêu thương và chữa lành.",
            traits: &["Yêu thương", "Chữa lành", "Hướng dẫn"],
        },
    ),
];
