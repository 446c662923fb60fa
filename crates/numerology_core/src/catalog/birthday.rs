//! Birthday readings keyed by the raw day of month, 1-31.

use super::BirthdayEntry;

pub(super) const BIRTHDAY: &[(u32, BirthdayEntry)] = &[
    (
        1,
        BirthdayEntry {
            meaning: "Ngày sinh của người lãnh đạo.",
            gift: "Khả năng khởi xướng và lãnh đạo tự nhiên.",
        },
    ),
    (
        2,
        BirthdayEntry {
            meaning: "Ngày sinh của người hòa giải.",
            gift: "Khả năng cảm nhận và kết nối người khác.",
        },
    ),
    (
        3,
        BirthdayEntry {
            meaning: "Ngày sinh của người sáng tạo.",
            gift: "Khả năng biểu đạt và sáng tạo nghệ thuật.",
        },
    ),
    (
        4,
        BirthdayEntry {
            meaning: "Ngày sinh của người xây dựng.",
            gift: "Khả năng tổ chức và xây dựng vững chắc.",
        },
    ),
    (
        5,
        BirthdayEntry {
            meaning: "Ngày sinh của người tự do.",
            gift: "Khả năng thích nghi và giao tiếp linh hoạt.",
        },
    ),
    (
        6,
        BirthdayEntry {
            meaning: "Ngày sinh của người nuôi dưỡng.",
            gift: "Khả năng chăm sóc và tạo hài hòa.",
        },
    ),
    (
        7,
        BirthdayEntry {
            meaning: "Ngày sinh của người tìm kiếm.",
            gift: "Khả năng phân tích và hiểu biết sâu sắc.",
        },
    ),
    (
        8,
        BirthdayEntry {
            meaning: "Ngày sinh của người quyền lực.",
            gift: "Khả năng quản lý và đạt thành công vật chất.",
        },
    ),
    (
        9,
        BirthdayEntry {
            meaning: "Ngày sinh của người hoàn thiện.",
            gift: "Khả năng yêu thương và phục vụ nhân loại.",
        },
    ),
    (
        10,
        BirthdayEntry {
            meaning: "Ngày sinh của người tiềm năng.",
            gift: "Kết hợp độc lập (1) và tiềm năng (0).",
        },
    ),
    (
        11,
        BirthdayEntry {
            meaning: "Ngày sinh của người trực giác.",
            gift: "Trực giác mạnh mẽ và khả năng truyền cảm hứng.",
        },
    ),
    (
        12,
        BirthdayEntry {
            meaning: "Ngày sinh của người biểu đạt.",
            gift: "Kết hợp lãnh đạo và sáng tạo.",
        },
    ),
    (
        13,
        BirthdayEntry {
            meaning: "Ngày sinh của người chuyển hóa.",
            gift: "Khả năng làm việc chăm chỉ và tái tạo.",
        },
    ),
    (
        14,
        BirthdayEntry {
            meaning: "Ngày sinh của người cân bằng.",
            gift: "Kết hợp xây dựng và tự do.",
        },
    ),
    (
        15,
        BirthdayEntry {
            meaning: "Ngày sinh của người hài hòa.",
            gift: "Kết hợp tự do và trách nhiệm.",
        },
    ),
    (
        16,
        BirthdayEntry {
            meaning: "Ngày sinh của người tâm linh.",
            gift: "Khả năng phân tích sâu và trực giác.",
        },
    ),
    (
        17,
        BirthdayEntry {
            meaning: "Ngày sinh của người thành công.",
            gift: "Kết hợp trí tuệ và quyền lực.",
        },
    ),
    (
        18,
        BirthdayEntry {
            meaning: "Ngày sinh của người nhân đạo.",
            gift: "Kết hợp lãnh đạo và nhân đạo.",
        },
    ),
    (
        19,
        BirthdayEntry {
            meaning: "Ngày sinh của người độc lập hoàn thiện.",
            gift: "Khởi đầu và kết thúc, chu kỳ hoàn chỉnh.",
        },
    ),
    (
        20,
        BirthdayEntry {
            meaning: "Ngày sinh của người nhạy cảm.",
            gift: "Nhạy cảm cao và khả năng hợp tác.",
        },
    ),
    (
        21,
        BirthdayEntry {
            meaning: "Ngày sinh của người sáng tạo xã hội.",
            gift: "Kết hợp hợp tác và sáng tạo.",
        },
    ),
    (
        22,
        BirthdayEntry {
            meaning: "Ngày sinh của kiến trúc sư.",
            gift: "Khả năng xây dựng những điều vĩ đại.",
        },
    ),
    (
        23,
        BirthdayEntry {
            meaning: "Ngày sinh của người giao tiếp.",
            gift: "Kết hợp hợp tác và biểu đạt.",
        },
    ),
    (
        24,
        BirthdayEntry {
            meaning: "Ngày sinh của người chăm sóc gia đình.",
            gift: "Kết hợp hợp tác và trách nhiệm.",
        },
    ),
    (
        25,
        BirthdayEntry {
            meaning: "Ngày sinh của người trực giác mạnh.",
            gift: "Kết hợp nhạy cảm và tự do.",
        },
    ),
    (
        26,
        BirthdayEntry {
            meaning: "Ngày sinh của người kinh doanh gia đình.",
            gift: "Kết hợp hợp tác và quyền lực.",
        },
    ),
    (
        27,
        BirthdayEntry {
            meaning: "Ngày sinh của người nhân đạo sáng tạo.",
            gift: "Kết hợp hợp tác và nhân đạo.",
        },
    ),
    (
        28,
        BirthdayEntry {
            meaning: "Ngày sinh của người lãnh đạo độc lập.",
            gift: "Kết hợp hợp tác và độc lập.",
        },
    ),
    (
        29,
        BirthdayEntry {
            meaning: "Ngày sinh của người trực giác cao.",
            gift: "Trực giác và nhạy cảm cực cao.",
        },
    ),
    (
        30,
        BirthdayEntry {
            meaning: "Ngày sinh của người biểu đạt sáng tạo.",
            gift: "Biểu đạt và sáng tạo nghệ thuật.",
        },
    ),
    (
        31,
        BirthdayEntry {
            meaning: "Ngày sinh của người xây dựng sáng tạo.",
            gift: "Kết hợp sáng tạo và xây dựng thực tế.",
        },
    ),
];
