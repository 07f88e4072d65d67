//! The 120-statement bank in authoring order.

use crate::catalog::question::QuestionItem;
use crate::catalog::CATALOG_SIZE;
use crate::types::{Axis::*, Letter::*, QuestionId};
use crate::types::{Axis, Letter};

const fn q(id: u32, axis: Axis, target: Letter, text: &'static str) -> QuestionItem {
    QuestionItem {
        id: QuestionId::new(id),
        text,
        axis,
        target,
    }
}

pub(crate) static BANK: [QuestionItem; CATALOG_SIZE] = [
    // Energy (I vs E)
    q(1, Energy, I, "J’aime trader seul, sans partager mes idées avec d’autres."),
    q(2, Energy, E, "Je me sens plus confiant lorsque je partage mes trades avec une communauté."),
    q(3, Energy, I, "Après plusieurs trades, j’ai besoin d’un moment seul pour me ressourcer."),
    q(4, Energy, E, "Je me sens stimulé quand je parle de mes positions avec d’autres traders."),
    q(5, Energy, I, "Je préfère lire et analyser en silence plutôt que discuter en direct."),
    q(6, Energy, E, "Quand je gagne, j’ai envie de le dire tout de suite à quelqu’un."),
    q(7, Energy, I, "Je suis à l’aise dans le fait d’être invisible sur le marché, sans reconnaissance."),
    q(8, Energy, E, "J’ai besoin qu’on remarque mes réussites."),
    q(9, Energy, I, "Je trouve que la solitude renforce ma lucidité."),
    q(10, Energy, E, "Je trouve que l’énergie du groupe renforce mon engagement."),
    q(11, Energy, I, "Quand je perds, je garde mes émotions pour moi."),
    q(12, Energy, E, "Quand je gagne, j’ai tendance à l’exprimer bruyamment."),
    q(13, Energy, I, "Mes proches savent rarement ce que j’ai ressenti après une journée de trading."),
    q(14, Energy, E, "J’aime célébrer mes victoires avec d’autres."),
    q(15, Energy, I, "J’intériorise mes frustrations sans en parler."),
    q(16, Energy, E, "J’ai besoin de partager mes émotions, même négatives, après une perte."),
    q(17, Energy, I, "Je garde mes pensées pour moi tant qu’elles ne sont pas structurées."),
    q(18, Energy, E, "Je parle souvent à voix haute de ce que je ressens face au marché."),
    q(19, Energy, I, "Je trouve qu’exprimer mes émotions brouille mon jugement."),
    q(20, Energy, E, "Je trouve qu’exprimer mes émotions me libère et me clarifie."),
    q(21, Energy, I, "Je préfère attendre avant de prendre une décision de trade."),
    q(22, Energy, E, "J’aime être le premier à cliquer quand une opportunité se présente."),
    q(23, Energy, I, "Je préfère laisser d’autres s’engager avant moi."),
    q(24, Energy, E, "J’aime prendre les devants même si je n’ai pas toutes les infos."),
    q(25, Energy, I, "Je me sens plus à l’aise dans une posture d’observateur."),
    q(26, Energy, E, "Je me sens plus à l’aise dans une posture d’acteur direct."),
    q(27, Energy, I, "Je préfère réfléchir longtemps avant d’agir."),
    q(28, Energy, E, "Je préfère agir vite et réfléchir ensuite."),
    q(29, Energy, I, "Je crois que la patience est une force."),
    q(30, Energy, E, "Je crois que la vitesse est une force."),

    // Action (S vs T)
    q(31, Action, S, "J’évite de trader si je ne suis pas certain."),
    q(32, Action, T, "Je prends volontiers un trade même avec de l’incertitude."),
    q(33, Action, S, "Je préfère passer à côté que d’entrer trop tôt."),
    q(34, Action, T, "Je préfère entrer trop tôt que de passer à côté."),
    q(35, Action, S, "Je préfère attendre plusieurs confirmations."),
    q(36, Action, T, "Je préfère capturer l’opportunité rapidement quitte à me tromper."),
    q(37, Action, S, "Je ressens du stress si je clique trop souvent."),
    q(38, Action, T, "Je ressens du stress si je ne clique pas assez."),
    q(39, Action, S, "Je trouve normal de trader peu souvent."),
    q(40, Action, T, "Je trouve normal de trader très souvent."),
    q(41, Action, S, "Je laisse souvent passer des trades par prudence."),
    q(42, Action, T, "Je déteste laisser filer une opportunité."),
    q(43, Action, S, "Je pense que peu de trades suffisent pour performer."),
    q(44, Action, T, "Je pense qu’il faut être très actif pour performer."),
    q(45, Action, S, "Je préfère filtrer au maximum les setups."),
    q(46, Action, T, "Je préfère multiplier les setups pour ne rien rater."),
    q(47, Action, T, "Je me sens frustré si je n’ai pas cliqué de la journée."),
    q(48, Action, S, "Je me sens rassuré même avec zéro trade."),
    q(49, Action, T, "J’ai l’impression que chaque opportunité ratée est une perte."),
    q(50, Action, S, "J’ai l’impression que rater un trade ne change rien."),
    q(51, Action, S, "J’ouvre rarement plus d’une position à la fois."),
    q(52, Action, T, "J’ouvre souvent plusieurs positions en même temps."),
    q(53, Action, S, "Je limite volontairement mes trades quotidiens."),
    q(54, Action, T, "Je trade sans limite tant que le marché est actif."),
    q(55, Action, S, "Je pense qu’un petit nombre de trades suffit."),
    q(56, Action, T, "Je pense que plus j’enchaîne, mieux c’est."),
    q(57, Action, S, "Je me sens en sécurité avec peu de clics."),
    q(58, Action, T, "Je me sens excité avec beaucoup de clics."),
    q(59, Action, S, "Je crois que la retenue est une qualité."),
    q(60, Action, T, "Je crois que l’audace est une qualité."),

    // Cognition (R vs X)
    q(61, Cognition, R, "J’ai besoin de preuves chiffrées pour cliquer."),
    q(62, Cognition, X, "Je clique souvent sur une impression forte."),
    q(63, Cognition, R, "Je fais confiance aux statistiques."),
    q(64, Cognition, X, "Je fais confiance à mon instinct."),
    q(65, Cognition, R, "J’ai du mal à agir sans plan écrit."),
    q(66, Cognition, X, "J’ai du mal à agir sans ressentir une conviction intérieure."),
    q(67, Cognition, R, "Je me fie surtout aux indicateurs techniques."),
    q(68, Cognition, X, "Je me fie surtout à l’ambiance du marché."),
    q(69, Cognition, R, "Je préfère la logique froide."),
    q(70, Cognition, X, "Je préfère l’intuition vive."),
    q(71, Cognition, R, "Une perte n’affecte pas mon jugement."),
    q(72, Cognition, X, "Une perte me bouleverse fortement."),
    q(73, Cognition, R, "Je reste stable après un gain."),
    q(74, Cognition, X, "Je suis exalté après un gain."),
    q(75, Cognition, R, "J’arrive à rester neutre en toute circonstance."),
    q(76, Cognition, X, "J’ai du mal à rester neutre face aux variations."),
    q(77, Cognition, R, "Je crois que les émotions doivent être éteintes."),
    q(78, Cognition, X, "Je crois que les émotions donnent de l’énergie."),
    q(79, Cognition, R, "Je considère les pertes comme un coût normal."),
    q(80, Cognition, X, "Je considère les pertes comme une blessure personnelle."),
    q(81, Cognition, R, "J’aime analyser en détail les données chiffrées."),
    q(82, Cognition, X, "J’aime me fier à mes ressentis face aux graphiques."),
    q(83, Cognition, R, "Je prends du plaisir à construire des statistiques."),
    q(84, Cognition, X, "Je prends du plaisir à lire le marché “à l’œil nu”."),
    q(85, Cognition, R, "Je fais confiance aux modèles."),
    q(86, Cognition, X, "Je fais confiance à mes sensations."),
    q(87, Cognition, R, "Je préfère suranalyser plutôt que ressentir."),
    q(88, Cognition, X, "Je préfère ressentir plutôt que suranalyser."),
    q(89, Cognition, R, "Les chiffres m’apaisent."),
    q(90, Cognition, X, "Les chiffres me fatiguent."),

    // Control (D vs C)
    q(91, Control, D, "Je respecte mon plan même quand c’est difficile."),
    q(92, Control, C, "Je dévie souvent de mon plan."),
    q(93, Control, D, "Je crois qu’une règle doit être respectée."),
    q(94, Control, C, "Je crois qu’une règle peut être adaptée selon l’humeur."),
    q(95, Control, D, "Je garde toujours mes stops fixes."),
    q(96, Control, C, "Je déplace souvent mes stops."),
    q(97, Control, D, "Je respecte mon risque par trade."),
    q(98, Control, C, "Je dépasse souvent mon risque par trade."),
    q(99, Control, D, "J’ai confiance dans mes règles."),
    q(100, Control, C, "J’ai confiance dans mon instinct même contre les règles."),
    q(101, Control, D, "Je tiens un journal de trading précis."),
    q(102, Control, C, "Je ne tiens pas de journal."),
    q(103, Control, D, "Je relis mes notes régulièrement."),
    q(104, Control, C, "Je préfère improviser."),
    q(105, Control, D, "J’aime planifier mes sessions."),
    q(106, Control, C, "J’aime la spontanéité totale."),
    q(107, Control, D, "Je relis mes erreurs passées."),
    q(108, Control, C, "Je préfère oublier mes erreurs passées."),
    q(109, Control, D, "Je suis organisé dans ma routine."),
    q(110, Control, C, "Je suis désordonné dans ma routine."),
    q(111, Control, D, "J’attends toujours la session prévue."),
    q(112, Control, C, "Je peux cliquer à n’importe quel moment."),
    q(113, Control, D, "Je crois que la discipline horaire est essentielle."),
    q(114, Control, C, "Je crois que le timing n’a pas de règles."),
    q(115, Control, D, "Je respecte mon calendrier."),
    q(116, Control, C, "Je trade sans calendrier."),
    q(117, Control, D, "J’ai besoin de structure."),
    q(118, Control, C, "J’ai besoin de liberté."),
    q(119, Control, D, "J’aime le trading ritualisé."),
    q(120, Control, C, "J’aime le trading imprévisible."),
];
