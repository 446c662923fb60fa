//! Life path readings for 1-9 and the master numbers.

use super::LifePathEntry;

pub(super) const LIFE_PATH: &[(u32, LifePathEntry)] = &[
    (
        1,
        LifePathEntry {
            meaning: "Người tiên phong, lãnh đạo bẩm sinh với ý chí mạnh mẽ và quyết tâm cao.",
            strengths: &["Độc lập", "Sáng tạo", "Tự tin", "Dũng cảm", "Có tầm nhìn"],
            challenges: &["Độc đoán", "Cứng đầu", "Ích kỷ", "Thiếu kiên nhẫn"],
            career: &["Doanh nhân", "Giám đốc", "Phát minh", "Nghệ sĩ độc lập"],
            relationships:
                "Cần đối tác độc lập, tôn trọng không gian cá nhân. Phải học cách lắng nghe và chia sẻ quyền lực.",
        },
    ),
    (
        2,
        LifePathEntry {
            meaning: "Người hòa giải, ngoại giao với khả năng cảm nhận và hợp tác tuyệt vời.",
            strengths: &["Nhạy cảm", "Kiên nhẫn", "Hợp tác", "Ngoại giao", "Trực giác tốt"],
            challenges: &["Quá nhạy cảm", "Thiếu tự tin", "Lệ thuộc", "Thiếu quyết đoán"],
            career: &["Tư vấn", "Ngoại giao", "Y tá", "Giáo viên", "Nghệ thuật"],
            relationships:
                "Cần mối quan hệ hài hòa, yêu thương. Là người đồng hành lý tưởng, luôn quan tâm đối phương.",
        },
    ),
    (
        3,
        LifePathEntry {
            meaning: "Người sáng tạo, giao tiếp xuất sắc với khả năng biểu đạt và lạc quan.",
            strengths: &["Sáng tạo", "Giao tiếp tốt", "Lạc quan", "Xã hội", "Nghệ thuật"],
            challenges: &["Hay tán phát", "Thiếu tập trung", "Bề nổi", "Lãng phí"],
            career: &["Nghệ sĩ", "Diễn giả", "Nhà văn", "Marketing", "Giải trí"],
            relationships:
                "Cần tự do và sự phấn khích. Mang lại niềm vui và sự sống động cho mối quan hệ.",
        },
    ),
    (
        4,
        LifePathEntry {
            meaning: "Người xây dựng, thực tế với tính kỷ luật và trách nhiệm cao.",
            strengths: &["Thực tế", "Kỷ luật", "Tổ chức tốt", "Chăm chỉ", "Đáng tin cậy"],
            challenges: &["Cứng nhắc", "Quá thận trọng", "Thiếu linh hoạt", "Công việc quá"],
            career: &["Kỹ sư", "Kế toán", "Quản lý", "Xây dựng", "Luật sư"],
            relationships:
                "Trung thành và đáng tin cậy. Cần đối tác ổn định, đánh giá hành động hơn lời nói.",
        },
    ),
    (
        5,
        LifePathEntry {
            meaning: "Người tự do, phiêu lưu với khát khao trải nghiệm và thay đổi.",
            strengths: &["Linh hoạt", "Tự do", "Năng động", "Giao tiếp", "Đa tài"],
            challenges: &["Bất ổn", "Thiếu cam kết", "Bốc đồng", "Thiếu kiên nhẫn"],
            career: &["Du lịch", "Báo chí", "Bán hàng", "Giải trí", "Tư vấn"],
            relationships: "Cần tự do và không gian. Mối quan hệ phải thú vị và đa dạng.",
        },
    ),
    (
        6,
        LifePathEntry {
            meaning: "Người nuôi dưỡng, trách nhiệm với gia đình và cộng đồng.",
            strengths: &["Trách nhiệm", "Yêu thương", "Hòa giải", "Nghệ thuật", "Chữa lành"],
            challenges: &["Quá lo lắng", "Kiểm soát", "Hy sinh quá mức", "Hoàn hảo chủ nghĩa"],
            career: &["Giáo viên", "Y tá", "Tư vấn", "Thiết kế", "Công tác xã hội"],
            relationships: "Cam kết và chăm sóc. Cần được đánh giá và không bị lợi dụng lòng tốt.",
        },
    ),
    (
        7,
        LifePathEntry {
            meaning: "Người tìm kiếm chân lý, phân tích với trí tuệ và tâm linh sâu sắc.",
            strengths: &["Trí tuệ", "Phân tích", "Tâm linh", "Trực giác", "Nghiên cứu"],
            challenges: &["Cô lập", "Hoài nghi", "Lạnh lùng", "Khó gần"],
            career: &["Nghiên cứu", "Khoa học", "Tâm linh", "Phân tích", "Giáo sư"],
            relationships:
                "Cần không gian riêng tư và kết nối sâu sắc. Khó mở lòng nhưng trung thành.",
        },
    ),
    (
        8,
        LifePathEntry {
            meaning: "Người quyền lực, thành công với khả năng quản lý và tài chính xuất sắc.",
            strengths: &["Tài chính", "Quyền lực", "Tổ chức", "Tham vọng", "Lãnh đạo"],
            challenges: &["Vật chất hóa", "Độc đoán", "Công việc quá", "Thiếu cân bằng"],
            career: &["Kinh doanh", "Tài chính", "Quản lý", "Đầu tư", "Giám đốc"],
            relationships:
                "Cần đối tác mạnh mẽ và độc lập. Phải cân bằng giữa sự nghiệp và tình cảm.",
        },
    ),
    (
        9,
        LifePathEntry {
            meaning: "Người nhân đạo, hoàn thiện với tình yêu thương và sự hy sinh cho nhân loại.",
            strengths: &["Nhân đạo", "Từ bi", "Nghệ thuật", "Sáng tạo", "Lý tưởng"],
            challenges: &["Lý tưởng hóa", "Tự hy sinh", "Cảm xúc", "Khó buông bỏ"],
            career: &["Từ thiện", "Nghệ thuật", "Chữa lành", "Giảng dạy", "Tư vấn"],
            relationships: "Yêu sâu đậm và vô điều kiện. Cần học cách yêu bản thân trước.",
        },
    ),
    (
        11,
        LifePathEntry {
            meaning:
                "Số Chủ 11 - Người truyền cảm hứng, trực giác mạnh mẽ với sứ mệnh tâm linh cao.",
            strengths: &[
                "Trực giác mạnh",
                "Truyền cảm hứng",
                "Tâm linh",
                "Sáng tạo",
                "Lãnh đạo tinh thần",
            ],
            challenges: &["Căng thẳng cao", "Nhạy cảm quá mức", "Lý tưởng hóa", "Áp lực bản thân"],
            career: &["Giáo viên tâm linh", "Nghệ sĩ", "Tư vấn", "Chữa lành", "Diễn giả"],
            relationships:
                "Cần kết nối sâu sắc và tâm linh. Đối tác phải hiểu và hỗ trợ sứ mệnh của họ.",
        },
    ),
    (
        22,
        LifePathEntry {
            meaning: "Số Chủ 22 - Kiến trúc sư vĩ đại, khả năng biến ý tưởng thành hiện thực.",
            strengths: &[
                "Xây dựng vĩ đại",
                "Thực tế cao",
                "Tầm nhìn",
                "Lãnh đạo",
                "Tổ chức xuất sắc",
            ],
            challenges: &["Áp lực lớn", "Hoàn hảo chủ nghĩa", "Công việc quá mức", "Căng thẳng"],
            career: &[
                "Doanh nhân lớn",
                "Kiến trúc sư",
                "Chính trị",
                "Tổ chức quốc tế",
                "Nhà từ thiện",
            ],
            relationships: "Cần đối tác hiểu và hỗ trợ tham vọng lớn. Phải học cách cân bằng.",
        },
    ),
    (
        33,
        LifePathEntry {
            meaning: "Số Chủ 33 - Thầy giáo vĩ đại, yêu thương vô điều kiện và chữa lành.",
            strengths: &["Yêu thương cao", "Chữa lành", "Hướng dẫn", "Từ bi", "Hy sinh cao cả"],
            challenges: &[
                "Hy sinh quá mức",
                "Áp lực tâm linh",
                "Quá quan tâm người khác",
                "Bỏ quên bản thân",
            ],
            career: &["Chữa lành", "Giáo viên", "Từ thiện", "Nghệ thuật", "Lãnh đạo tâm linh"],
            relationships: "Yêu sâu sắc và chữa lành. Cần học cách tự chăm sóc bản thân.",
        },
    ),
];
