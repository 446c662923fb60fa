//! Personal year readings and fixed period descriptions.

pub(super) const PERSONAL_YEAR: &[(u32, &str)] = &[
    (
        1,
        "Năm mới bắt đầu - Năm của sự khởi đầu mới, cơ hội mới, và sự tự tin. Đây là thời điểm để bắt đầu dự án mới và thể hiện bản thân.",
    ),
    (
        2,
        "Năm hợp tác - Năm của sự kiên nhẫn, hợp tác và phát triển mối quan hệ. Tập trung vào làm việc nhóm và xây dựng kết nối.",
    ),
    (
        3,
        "Năm sáng tạo - Năm của sự sáng tạo, giao tiếp và biểu đạt bản thân. Thời gian tuyệt vời cho nghệ thuật và xã hội.",
    ),
    (
        4,
        "Năm xây dựng - Năm của sự chăm chỉ, kỷ luật và xây dựng nền tảng. Tập trung vào công việc và tổ chức cuộc sống.",
    ),
    (
        5,
        "Năm thay đổi - Năm của sự tự do, thay đổi và phiêu lưu. Đón nhận cơ hội mới và trải nghiệm khác biệt.",
    ),
    (
        6,
        "Năm trách nhiệm - Năm của gia đình, trách nhiệm và chăm sóc. Tập trung vào nhà cửa và người thân.",
    ),
    (
        7,
        "Năm nội tâm - Năm của sự tự suy ngẫm, học tập và phát triển tâm linh. Thời gian để tìm hiểu bản thân.",
    ),
    (
        8,
        "Năm thành công - Năm của sự thành tựu, quyền lực và thịnh vượng vật chất. Tập trung vào sự nghiệp và tài chính.",
    ),
    (
        9,
        "Năm hoàn thiện - Năm của sự kết thúc, hoàn thiện và buông bỏ. Chuẩn bị cho chu kỳ mới và phục vụ người khác.",
    ),
];

pub(super) const LIFE_CYCLE_MEANINGS: [&str; 3] = [
    "Chu kỳ đầu tiên, giai đoạn học hỏi và phát triển cơ bản.",
    "Chu kỳ thứ hai, giai đoạn trưởng thành và phát triển sự nghiệp.",
    "Chu kỳ thứ ba, giai đoạn hoàn thiện và trí tuệ.",
];

pub(super) const PINNACLE_MEANINGS: [&str; 4] = [
    "Đỉnh cao đầu tiên, giai đoạn học tập và phát triển ban đầu.",
    "Đỉnh cao thứ hai, giai đoạn xây dựng nền tảng.",
    "Đỉnh cao thứ ba, giai đoạn thu hoạch và phát triển.",
    "Đỉnh cao thứ tư, giai đoạn hoàn thiện và trí tuệ.",
];
