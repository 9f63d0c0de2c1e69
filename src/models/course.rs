//! Course catalogue: short ASCII codes used in filenames mapped to display names.

/// A course known to the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Course {
    /// Code as it appears in exam filenames
    pub code: &'static str,
    /// Name stored in the `exams.course` column
    pub display_name: &'static str,
}

const fn course(code: &'static str, display_name: &'static str) -> Course {
    Course { code, display_name }
}

/// All known courses.
pub const COURSES: &[Course] = &[
    course("MathimatikiAnalisi", "Μαθηματική Ανάλυση"),
    course("PsifiakiSxediasi", "Ψηφιακή Σχεδίαση"),
    course("EisagogiProgrammatismo", "Εισαγωγή στον Προγραμματισμό"),
    course("PsifiakaSystimata", "Εισαγωγή στα Ψηφιακά Συστήματα"),
    course("Fysiki", "Φυσική"),
    course("DiakritaMathimatika", "Διακριτά Μαθηματικά"),
    course("PithanotitesStatistiki", "Πιθανότητες και Στατιστική"),
    course("Ilektroniki", "Ηλεκτρονική"),
    course(
        "AntikeimenostrafisProgramatismos",
        "Αντικειμενοστρεφής Προγραμματισμός",
    ),
    course("AnalisiSxediastSystimaton", "Ανάλυση και Σχεδίαση Συστημάτων"),
    course("ArithmitikiAnalisi", "Αριθμητική Ανάλυση"),
    course("ProxorimenosProgramatismos", "Προχωρημένος Προγραμματισμός"),
    course("Diktya1", "Δίκτυα Υπολογιστών I"),
    course("Diktya2", "Δίκτυα Υπολογιστών II"),
    course("DomesDedomenon", "Δομές Δεδομένων"),
    course("SymataSystimata", "Σήματα και Συστήματα"),
    course("GrammikiAlgebra", "Γραμμική Άλγεβρα"),
    course(
        "KinitosDiaxitosYpologismos",
        "Κινητός και Διάχυτος Υπολογισμός",
    ),
    course("BaseisDedomenon", "Συστήματα Βάσεων Δεδομένων"),
    course("PsifiakiEpeksergasiaSimatos", "Ψηφιακή Επεξεργασία Σήματος"),
    course("AnalisiSxediastAlgorithmon", "Ανάλυση και Σχεδίαση Αλγορίθμων"),
    course(
        "OrganosiYpologistikonSystimaton",
        "Οργάνωση Υπολογιστικών Συστημάτων",
    ),
    course("TexnologiaLogismikou", "Τεχνολογία Λογισμικού"),
    course("PsifiakaTilepSys", "Ψηφιακά Τηλεπικοινωνιακά Συστήματα"),
    course(
        "TexnologiesEfarmogesDiadiktiou",
        "Τεχνολογίες και Εφαρμογές Διαδικτύου",
    ),
    course("ParallilosProgramatismos", "Παράλληλος Προγραμματισμός"),
    course(
        "ParallilaKatanemimenaSys",
        "Παράλληλα και Κατανεμημένα Συστήματα",
    ),
    course("SysAftomatouElenxou", "Συστήματα Αυτομάτου Ελέγχου"),
    course("PlirforSysDioikisis", "Πληροφοριακά Συστήματα Διοίκησης"),
    course("EnsomatomenaSystimata", "Ενσωματωμένα Συστήματα"),
    course("MethodologiaErevnas", "Μεθοδολογία Έρευνας"),
    course("LeitourgikaSystimata", "Λειτουργικά Συστήματα"),
    course("EvryzonikesEpikinonies", "Ευρυζωνικές Επικοινωνίες"),
    course("ArchitektonikiYpologiston", "Αρχιτεκτονική Υπολογιστών"),
    course("AsfaliaPsifiakonSystimaton", "Ασφάλεια Ψηφιακών Συστημάτων"),
    course(
        "EfarmogesGeoplirforikis",
        "Εφαρμογές Γεωπληροφορικής στο Περιβάλλον",
    ),
    course(
        "EfarmSysAkriviasProtogeniParagogi",
        "Εφαρμογές Συστημάτων Ακριβείας στην Πρωτογενή Παραγωγή",
    ),
    course(
        "EfarmPsifSysBiomixania",
        "Εφαρμογές Ψηφιακών Συστημάτων στη Βιομηχανία",
    ),
    course(
        "DiasfalisiPoiotitasPsifSys",
        "Διασφάλιση Ποιότητας Ψηφιακών Συστημάτων",
    ),
    course(
        "PsifSysProtogeniTomea",
        "Ψηφιακά Συστήματα στον Πρωτογενή Τομέα",
    ),
    course("KvantikiYpol", "Κβαντική Υπολογιστική"),
];

/// Look up a course by its exact (case-sensitive) code.
pub fn find(code: &str) -> Option<&'static Course> {
    COURSES.iter().find(|c| c.code == code)
}

/// Resolve a course code to its display name.
///
/// Unknown codes pass through unchanged.
pub fn display_name(code: &str) -> &str {
    find(code).map(|c| c.display_name).unwrap_or(code)
}
