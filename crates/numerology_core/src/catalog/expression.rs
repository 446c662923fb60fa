//! Expression readings for 1-9 and the master numbers.

use super::ExpressionEntry;

pub(super) const EXPRESSION: &[(u32, ExpressionEntry)] = &[
    (
        1,
        ExpressionEntry {
            meaning: "Bạn sinh ra để lãnh đạo và tiên phong trong các lĩnh vực mới.",
            talents: &["Lãnh đạo", "Khởi xướng", "Sáng tạo độc đáo", "Quyết đoán"],
            purpose: "Trở thành người dẫn đầu, mở đường cho người khác theo.",
        },
    ),
    (
        2,
        ExpressionEntry {
            meaning: "Bạn sinh ra để hòa giải và kết nối mọi người.",
            talents: &["Ngoại giao", "Hợp tác", "Nhạy cảm", "Hỗ trợ"],
            purpose: "Tạo sự hài hòa và hòa bình trong mọi mối quan hệ.",
        },
    ),
    (
        3,
        ExpressionEntry {
            meaning: "Bạn sinh ra để sáng tạo và truyền cảm hứng qua nghệ thuật.",
            talents: &["Sáng tạo nghệ thuật", "Giao tiếp", "Giải trí", "Khuyến khích"],
            purpose: "Mang niềm vui và cảm hứng cho thế giới.",
        },
    ),
    (
        4,
        ExpressionEntry {
            meaning: "Bạn sinh ra để xây dựng nền tảng vững chắc cho tương lai.",
            talents: &["Tổ chức", "Xây dựng hệ thống", "Quản lý", "Thực tế"],
            purpose: "Tạo ra cấu trúc và trật tự ổn định.",
        },
    ),
    (
        5,
        ExpressionEntry {
            meaning: "Bạn sinh ra để khám phá và mang đến tự do cho người khác.",
            talents: &["Linh hoạt", "Truyền thông", "Phiêu lưu", "Đổi mới"],
            purpose: "Khám phá thế giới và chia sẻ kiến thức.",
        },
    ),
    (
        6,
        ExpressionEntry {
            meaning: "Bạn sinh ra để chăm sóc và nuôi dưỡng cộng đồng.",
            talents: &["Chăm sóc", "Tư vấn", "Sáng tạo nghệ thuật", "Hòa giải"],
            purpose: "Tạo môi trường yêu thương và hài hòa.",
        },
    ),
    (
        7,
        ExpressionEntry {
            meaning: "Bạn sinh ra để tìm kiếm và chia sẻ trí tuệ sâu sắc.",
            talents: &["Nghiên cứu", "Phân tích", "Tâm linh", "Giảng dạy"],
            purpose: "Khám phá chân lý và chia sẻ hiểu biết.",
        },
    ),
    (
        8,
        ExpressionEntry {
            meaning: "Bạn sinh ra để tạo ra sự thịnh vượng và quyền lực.",
            talents: &["Kinh doanh", "Quản lý tài chính", "Tổ chức", "Lãnh đạo"],
            purpose: "Đạt thành công vật chất và giúp đỡ người khác thịnh vượng.",
        },
    ),
    (
        9,
        ExpressionEntry {
            meaning: "Bạn sinh ra để phục vụ nhân loại với tình yêu thương.",
            talents: &["Nhân đạo", "Nghệ thuật", "Chữa lành", "Từ bi"],
            purpose: "Nâng cao ý thức và yêu thương của nhân loại.",
        },
    ),
    (
        11,
        ExpressionEntry {
            meaning: "Bạn sinh ra để truyền cảm hứng tâm linh cho thế giới.",
            talents: &["Trực giác", "Truyền cảm hứng", "Tâm linh", "Hướng dẫn"],
            purpose: "Nâng cao ý thức tâm linh của nhân loại.",
        },
    ),
    (
        22,
        ExpressionEntry {
            meaning: "Bạn sinh ra để xây dựng những dự án vĩ đại phục vụ nhân loại.",
            talents: &["Tầm nhìn lớn", "Tổ chức quy mô lớn", "Thực thi", "Lãnh đạo"],
            purpose: "Biến ý tưởng lớn thành hiện thực phục vụ thế giới.",
        },
    ),
    (
        33,
        ExpressionEntry {
            meaning: "Bạn sinh ra để yêu thương và chữa lành thế giới.",
            talents: &["Yêu thương vô điều kiện", "Chữa lành", "Giảng dạy", "Hướng dẫn tâm linh"],
            purpose: "Nâng tầm yêu thương và chữa lành cho nhân loại.",
        },
    ),
];
