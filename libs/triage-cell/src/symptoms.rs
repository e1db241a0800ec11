//! Static symptom → specialty routing table.
//!
//! Keys are the symptom phrases the NLU extracts, lowercased. Anything the
//! table does not know routes to the general clinic.

pub const GENERAL_SPECIALTY: &str = "Tổng quát";

/// Map one extracted symptom phrase to its specialty.
pub fn specialty_for(symptom: &str) -> &'static str {
    match symptom.trim().to_lowercase().as_str() {
        // Thần kinh
        "đau đầu"
        | "chóng mặt"
        | "mất ngủ"
        | "co giật"
        | "tê bì tay chân"
        | "rối loạn trí nhớ"
        | "đau nửa đầu"
        | "run tay"
        | "mất thăng bằng"
        | "đau dây thần kinh"
        | "liệt mặt" => "Thần kinh",

        // Nội khoa
        "sốt"
        | "mệt mỏi"
        | "ho"
        | "khó thở"
        | "đau ngực"
        | "đau khớp"
        | "tiêu chảy"
        | "buồn nôn"
        | "đau bụng"
        | "chán ăn"
        | "ợ nóng"
        | "đầy hơi"
        | "táo bón"
        | "nôn ra máu"
        | "vàng da" => "Nội khoa",

        // Ngoại khoa
        "chấn thương"
        | "gãy xương"
        | "vết thương hở"
        | "đau lưng"
        | "đau vai gáy"
        | "u bướu ngoài da"
        | "sưng tấy"
        | "đau sau phẫu thuật"
        | "bong gân"
        | "trật khớp" => "Ngoại khoa",

        // Nhi khoa
        "sốt ở trẻ em"
        | "ho ở trẻ em"
        | "nôn trớ"
        | "khò khè"
        | "biếng ăn"
        | "tiêu chảy ở trẻ em"
        | "phát ban"
        | "sổ mũi"
        | "quấy khóc"
        | "chậm tăng cân" => "Nhi khoa",

        // Sản khoa
        "trễ kinh"
        | "đau bụng dưới"
        | "ra khí hư bất thường"
        | "chảy máu âm đạo"
        | "ốm nghén"
        | "đau lưng khi mang thai"
        | "rối loạn kinh nguyệt"
        | "nghi ngờ mang thai" => "Sản khoa",

        // Răng Hàm Mặt
        "đau răng"
        | "sưng nướu"
        | "hôi miệng"
        | "chảy máu chân răng"
        | "viêm lợi"
        | "sâu răng"
        | "nhức răng"
        | "hàm lệch"
        | "mọc răng khôn" => "Răng Hàm Mặt",

        // Da liễu
        "nổi mề đay"
        | "ngứa da"
        | "mụn trứng cá"
        | "nấm da"
        | "viêm da"
        | "rụng tóc"
        | "khô da"
        | "bong tróc da"
        | "nổi mụn nước"
        | "thâm nám" => "Da liễu",

        // Tai Mũi Họng
        "đau họng"
        | "viêm họng"
        | "ù tai"
        | "nghẹt mũi"
        | "chảy máu cam"
        | "viêm xoang"
        | "khàn tiếng"
        | "đau tai"
        | "chảy mủ tai"
        | "ngáy to" => "Tai Mũi Họng",

        // Mắt
        "đau mắt"
        | "mờ mắt"
        | "đỏ mắt"
        | "ngứa mắt"
        | "chảy nước mắt"
        | "cộm mắt"
        | "nhìn đôi"
        | "khô mắt"
        | "sưng mí mắt" => "Mắt",

        // Tim mạch
        "hồi hộp"
        | "tim đập nhanh"
        | "đau thắt ngực"
        | "huyết áp cao"
        | "huyết áp thấp"
        | "phù chân"
        | "khó thở khi gắng sức"
        | "choáng ngất"
        | "nhịp tim không đều" => "Tim mạch",

        _ => GENERAL_SPECIALTY,
    }
}

/// Distinct specialties suggested by a symptom list, in first-seen order.
pub fn suggested_specialties(symptoms: &[String]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for symptom in symptoms {
        let specialty = specialty_for(symptom);
        if !seen.iter().any(|s| s == specialty) {
            seen.push(specialty.to_string());
        }
    }
    seen
}
