//! Attitude readings, single digits only.

use super::AttitudeEntry;

pub(super) const ATTITUDE: &[(u32, AttitudeEntry)] = &[
    (
        1,
        AttitudeEntry {
            meaning: "Thái độ tự tin và quyết đoán.",
            outlook: "Tiếp cận cuộc sống với sự tự tin và quyết tâm.",
        },
    ),
    (
        2,
        AttitudeEntry {
            meaning: "Thái độ hợp tác và kiên nhẫn.",
            outlook: "Tiếp cận cuộc sống với sự hòa bình và hợp tác.",
        },
    ),
    (
        3,
        AttitudeEntry {
            meaning: "Thái độ lạc quan và sáng tạo.",
            outlook: "Tiếp cận cuộc sống với niềm vui và sáng tạo.",
        },
    ),
    (
        4,
        AttitudeEntry {
            meaning: "Thái độ thực tế và chăm chỉ.",
            outlook: "Tiếp cận cuộc sống với sự nghiêm túc và kỷ luật.",
        },
    ),
    (
        5,
        AttitudeEntry {
            meaning: "Thái độ linh hoạt và phiêu lưu.",
            outlook: "Tiếp cận cuộc sống với sự tò mò và phiêu lưu.",
        },
    ),
    (
        6,
        AttitudeEntry {
            meaning: "Thái độ trách nhiệm và quan tâm.",
            outlook: "Tiếp cận cuộc sống với tình yêu thương và trách nhiệm.",
        },
    ),
    (
        7,
        AttitudeEntry {
            meaning: "Thái độ phân tích và suy ngẫm.",
            outlook: "Tiếp cận cuộc sống với sự sâu sắc và tìm tòi.",
        },
    ),
    (
        8,
        AttitudeEntry {
            meaning: "Thái độ tham vọng và quyền lực.",
            outlook: "Tiếp cận cuộc sống với tham vọng và quyết tâm thành công.",
        },
    ),
    (
        9,
        AttitudeEntry {
            meaning: "Thái độ từ bi và nhân đạo.",
            outlook: "Tiếp cận cuộc sống với tình yêu thương và hiểu biết.",
        },
    ),
];
